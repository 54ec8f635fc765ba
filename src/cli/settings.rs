//! Settings command implementation

use anyhow::{bail, Context, Result};
use clap::Subcommand;

use super::utils::parse_assignment;
use footnotes_core::{EngineConfig, Record, SettingValue, Settings, SettingsSchema, SqliteStore};

#[derive(Subcommand)]
pub enum SettingsCommand {
    /// Print the merged settings snapshot, or one container
    List {
        /// Only show the container at this index
        #[arg(long, value_name = "N")]
        container: Option<usize>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the current value of one setting
    Get {
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Store new values for settings of one container
    Set {
        /// Container index; defaults to the container owning the first key
        #[arg(long, value_name = "N")]
        container: Option<usize>,

        /// Values to store (KEY=VALUE, repeatable)
        #[arg(value_name = "KEY=VALUE", required = true)]
        assignments: Vec<String>,
    },

    /// Delete every stored container record
    Reset,

    /// Declare every container writable in the option store
    Register,
}

pub fn run(command: SettingsCommand, config: &EngineConfig) -> Result<()> {
    let store = SqliteStore::open(&config.store.path)
        .with_context(|| format!("Failed opening option store {}", config.store.path.display()))?;
    let mut settings = Settings::new(SettingsSchema::builtin(), store);

    match command {
        SettingsCommand::List { container, json } => {
            let record = match container {
                Some(index) => settings.load(index)?,
                None => settings.snapshot().clone(),
            };
            print_record(&record, json)
        }
        SettingsCommand::Get { key } => match settings.get(&key) {
            Some(value) => {
                println!("{}", value);
                Ok(())
            }
            None => bail!("Unknown setting: {}", key),
        },
        SettingsCommand::Set { container, assignments } => {
            let assignments = assignments
                .iter()
                .map(|arg| parse_assignment(arg))
                .collect::<Result<Vec<_>>>()?;
            set(&mut settings, container, assignments)
        }
        SettingsCommand::Reset => {
            settings.clear_all();
            println!("Reset {} settings containers", settings.container_count());
            Ok(())
        }
        SettingsCommand::Register => {
            settings.register_all();
            for name in settings.store().registered()? {
                println!("{}", name);
            }
            Ok(())
        }
    }
}

fn set(
    settings: &mut Settings<SqliteStore>,
    container: Option<usize>,
    assignments: Vec<(String, String)>,
) -> Result<()> {
    let index = match container {
        Some(index) => index,
        None => {
            let Some((first, _)) = assignments.first() else {
                bail!("No settings given");
            };
            let owner = settings
                .schema()
                .container_of(first)
                .with_context(|| format!("Unknown setting: {}", first))?;
            settings
                .schema()
                .container_index(owner)
                .with_context(|| format!("Unknown settings container: {}", owner))?
        }
    };

    let mut record = settings.load(index)?;
    for (key, raw) in assignments {
        let Some(default) = settings.defaults(index)?.get(&key) else {
            bail!("Setting '{}' does not belong to container {}", key, settings.container_name(index)?);
        };
        let value = coerce(default, raw).with_context(|| format!("Invalid value for {}", key))?;
        record.insert(key, value);
    }

    if !settings.save(index, record)? {
        bail!("Failed to save settings container {}", settings.container_name(index)?);
    }
    println!("Saved {}", settings.container_name(index)?);
    Ok(())
}

/// Parse `raw` into the same kind as the key's default value.
fn coerce(default: &SettingValue, raw: String) -> Result<SettingValue> {
    Ok(match default {
        SettingValue::Integer(_) => SettingValue::Integer(raw.trim().parse()?),
        SettingValue::Float(_) => SettingValue::Float(raw.trim().parse()?),
        SettingValue::Text(_) => SettingValue::Text(raw),
    })
}

fn print_record(record: &Record, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(record)?);
    } else {
        for (key, value) in record {
            println!("{} = {}", key, value);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerce_follows_default_kind() {
        assert_eq!(
            coerce(&SettingValue::Integer(0), " 12 ".to_string()).expect("int"),
            SettingValue::Integer(12)
        );
        assert_eq!(
            coerce(&SettingValue::Float(1.0), "0.5".to_string()).expect("float"),
            SettingValue::Float(0.5)
        );
        assert_eq!(
            coerce(&SettingValue::text("no"), "yes".to_string()).expect("text"),
            SettingValue::text("yes")
        );
        assert!(coerce(&SettingValue::Integer(0), "abc".to_string()).is_err());
    }
}
