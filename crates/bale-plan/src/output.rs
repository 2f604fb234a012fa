use std::collections::HashMap;

use bale_config::{ConfigError, Result, NAME_PLACEHOLDER};

/// Substitute the entry name into a filename template.
///
/// Every `[name]` occurrence is replaced; nothing is escaped. A template
/// without the placeholder yields the same filename for every entry.
pub fn resolve_output(template: &str, entry_name: &str) -> String {
    template.replace(NAME_PLACEHOLDER, entry_name)
}

/// Fail on the first filename claimed by two different producers.
///
/// `artifacts` yields `(filename, producer)` pairs in plan order.
pub fn detect_output_collisions<'a, I>(artifacts: I) -> Result<()>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut owners: HashMap<&str, &str> = HashMap::new();

    for (filename, producer) in artifacts {
        if let Some(first) = owners.insert(filename, producer) {
            return Err(ConfigError::OutputCollision {
                filename: filename.to_string(),
                first: first.to_string(),
                second: producer.to_string(),
            });
        }
    }

    Ok(())
}
