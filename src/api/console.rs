//! User-facing status lines. The wording is part of the tool's contract.
use std::io::{self, Write};
use std::path::Path;

use crate::constants::{BACKUPS_DIR, RESTART_COMMAND};

pub const MSG_START: &str = "🔄 Iniciando rollback del analizador...";
pub const MSG_NO_BACKUP: &str = "❌ No se encontraron backups en backups/";
pub const MSG_USING: &str = "📦 Usando backup:";
pub const MSG_DONE: &str = "✅ Rollback completado";
pub const MSG_NOTE: &str = "📝 Backend restaurado a la versión anterior";
pub const MSG_RESTART: &str = "🚀 Reinicia la aplicación con:";
pub const MSG_COPY_FAILED: &str = "❌ Error restaurando backup:";

pub fn start(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{MSG_START}")
}

pub fn no_backup(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{MSG_NO_BACKUP}")
}

pub fn using(out: &mut dyn Write, backup_name: &str) -> io::Result<()> {
    let shown = Path::new(BACKUPS_DIR).join(backup_name);
    writeln!(out, "{MSG_USING} {}", shown.display())
}

pub fn done(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{MSG_DONE}")?;
    writeln!(out, "{MSG_NOTE}")?;
    writeln!(out)?;
    writeln!(out, "{MSG_RESTART}")?;
    writeln!(out, "   {RESTART_COMMAND}")
}
