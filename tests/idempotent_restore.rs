mod common;

use analizador_rollback::Rollback;
use common::{TestEmitter, TestRoot};

#[test]
fn running_twice_gives_same_content() {
    let root = TestRoot::new();
    root.backup("2024-01-01_1200", Some("A"), 1_000);
    root.backup("2024-02-01_0900", Some("B"), 2_000);
    root.write_target("current");

    let api = Rollback::new(TestEmitter::default(), root.layout());

    let mut out1: Vec<u8> = Vec::new();
    let first = api.run(&mut out1).unwrap();
    let after_first = root.read_target();

    let mut out2: Vec<u8> = Vec::new();
    let second = api.run(&mut out2).unwrap();
    let after_second = root.read_target();

    assert_eq!(after_first, "B");
    assert_eq!(after_first, after_second);
    assert_eq!(first.after_hash, second.after_hash);
    assert_eq!(out1, out2);
}
