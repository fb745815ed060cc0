use std::any::type_name;

use documented::{Documented, DocumentedFields};
use toml_edit::{Decor, Item, RawString, Table};
use tracing::warn;

use crate::error::{ConfigError, Result};

/// Appends each line of `docs` to the comment prefix of `decor`.
pub fn append_docs_as_toml_comments(decor: &mut Decor, docs: &str) {
    let existing = decor
        .prefix()
        .and_then(RawString::as_str)
        .unwrap_or_default()
        .to_string();

    let mut prefix = existing;
    if !prefix.trim().is_empty() {
        prefix.push_str("#\n");
    }

    for line in docs.lines() {
        if line.is_empty() {
            prefix.push_str("#\n");
        } else {
            prefix.push_str("# ");
            prefix.push_str(line);
            prefix.push('\n');
        }
    }

    decor.set_prefix(prefix);
}

/// Annotates every key of `table` with the field docs of `T`. Non-root tables
/// also receive the struct level docs of `T` above their header.
pub fn annotate_toml_table<T>(table: &mut Table, is_root: bool) -> Result<()>
where
    T: Documented + DocumentedFields,
{
    if !is_root {
        append_docs_as_toml_comments(table.decor_mut(), T::DOCS);
    }

    for (mut key, item) in table.iter_mut() {
        let name = key.get().to_string();
        let Ok(docs) = T::get_field_docs(&name) else {
            warn!(
                "Field '{}' has no documentation in '{}'",
                name,
                type_name::<T>()
            );
            continue;
        };

        match item {
            Item::None => return Err(ConfigError::UnexpectedTomlItem(name)),
            Item::Value(_) => append_docs_as_toml_comments(key.leaf_decor_mut(), docs),
            // sub-tables carry their own struct docs
            Item::Table(_) | Item::ArrayOfTables(_) => {}
        }
    }

    Ok(())
}
