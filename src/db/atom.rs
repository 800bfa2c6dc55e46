/*!
A database of 'atom related' things, accessed via fields on an [AtomDB] struct.

For the moment, this is limited to the internal and external name maps used when reading and writing [Atom]s, [literals](crate::structures::literal), etc.

```rust
# use propkb::db::atom::AtomDB;
let mut atom_db = AtomDB::default();

let rain = atom_db.atom_or_fresh("rain").unwrap();
let wet = atom_db.atom_or_fresh("wet").unwrap();

assert_ne!(rain, wet);
assert_eq!(atom_db.atom_or_fresh("rain"), Ok(rain));
assert_eq!(atom_db.external_name(wet), "wet");
assert_eq!(atom_db.atom("rain"), Some(rain));
assert_eq!(atom_db.atom("snow"), None);
assert_eq!(atom_db.count(), 2);
```
*/

use std::collections::HashMap;

use crate::{
    misc::log::targets::{self},
    structures::atom::{Atom, ATOM_MAX},
    types::err::{self},
};

/// The atom database.
#[derive(Default, Clone)]
pub struct AtomDB {
    /// A map from external names to internal atoms.
    internal: HashMap<String, Atom>,

    /// The external name of each atom, indexed by atom.
    external: Vec<String>,
}

impl AtomDB {
    /// A count of the atoms in the database.
    pub fn count(&self) -> usize {
        self.external.len()
    }

    /// The atom with the given external name, if one exists.
    pub fn atom(&self, name: &str) -> Option<Atom> {
        self.internal.get(name).copied()
    }

    /// The atom with the given external name, creating a fresh atom if none exists.
    pub fn atom_or_fresh(&mut self, name: &str) -> Result<Atom, err::AtomDBError> {
        if let Some(atom) = self.internal.get(name) {
            return Ok(*atom);
        }

        let atom = match Atom::try_from(self.external.len()) {
            Ok(atom) if atom <= ATOM_MAX => atom,
            _ => return Err(err::AtomDBError::AtomsExhausted),
        };

        log::trace!(target: targets::KNOWLEDGE_BASE, "Fresh atom {atom} named {name}");

        self.external.push(name.to_string());
        self.internal.insert(name.to_string(), atom);
        Ok(atom)
    }

    /// The external name of an atom.
    ///
    /// An atom which is not part of the database is named by its internal representation, prefixed by an underscore.
    pub fn external_name(&self, atom: Atom) -> std::borrow::Cow<'_, str> {
        match self.external.get(atom as usize) {
            Some(name) => std::borrow::Cow::Borrowed(name),
            None => std::borrow::Cow::Owned(format!("_{atom}")),
        }
    }
}
