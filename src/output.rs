use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;

use crate::error::OutputError;
use crate::family::{ByFamily, Family};
use crate::models::RemediationCommand;

pub fn command_file_name(family: Family) -> String {
    format!("prefix-limits-{}.set", family.junos_keyword())
}

/// Write one command file per family into `directory`, one command per line
///
/// Files are truncated on every run, so a family with nothing to fix ends up
/// with an empty file rather than last run's commands.
pub fn write_command_files(
    directory: &Path,
    commands: &ByFamily<Vec<RemediationCommand>>,
) -> Result<ByFamily<PathBuf>, OutputError> {
    let v4 = write_commands(&directory.join(command_file_name(Family::V4)), &commands.v4)?;
    let v6 = write_commands(&directory.join(command_file_name(Family::V6)), &commands.v6)?;
    Ok(ByFamily::new(v4, v6))
}

fn write_commands(path: &Path, commands: &[RemediationCommand]) -> Result<PathBuf, OutputError> {
    let wrap = |source| OutputError {
        path: path.to_path_buf(),
        source,
    };
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(wrap)?;

    let mut buf = BufWriter::new(file);
    for command in commands {
        writeln!(buf, "{}", command.text).map_err(wrap)?;
    }
    buf.flush().map_err(wrap)?;
    info!("Wrote {} commands to {}", commands.len(), path.display());
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    use crate::remediation::set_command;

    fn command(group: &str, family: Family, limit: u32) -> RemediationCommand {
        RemediationCommand {
            group_name: group.to_string(),
            family,
            new_limit: limit,
            text: set_command(group, family, limit),
        }
    }

    #[test]
    fn test_write_command_files() {
        let dir = env::temp_dir().join(format!("maxpfx-output-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        // Stale content from an earlier run must not survive
        fs::write(dir.join("prefix-limits-inet6.set"), "stale\n").unwrap();

        let commands = ByFamily::new(
            vec![
                command("PEER-A", Family::V4, 1000),
                command("PEER-B", Family::V4, 20),
            ],
            vec![],
        );
        let paths = write_command_files(&dir, &commands).unwrap();

        assert_eq!(
            fs::read_to_string(&paths.v4).unwrap(),
            "set protocols bgp group PEER-A family inet unicast prefix-limit maximum 1000\n\
             set protocols bgp group PEER-B family inet unicast prefix-limit maximum 20\n"
        );
        assert_eq!(fs::read_to_string(&paths.v6).unwrap(), "");
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_unwritable_directory() {
        let dir = Path::new("./fixtures/does/not/exist");
        let err = write_command_files(dir, &ByFamily::default()).unwrap_err();
        assert!(err.path.ends_with("prefix-limits-inet.set"));
    }
}
