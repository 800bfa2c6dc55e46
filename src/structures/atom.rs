/*!
(The internal representation of) an atom, aka. a propositional symbol.

Atoms are things with a name which may be true or false.
- 'Internal' atoms are used by a knowledge base when storing clauses and resolving.
- 'External' atoms are the names used when writing or reading a sentence, e.g. `Rain`, `p`, `is_mammal`. \
  The correspondence between the two is kept in the [atom database](crate::db::atom).

Each internal atom is a u32, and the atoms of a knowledge base are always [0..*m*) for some *m*.

```rust
# use propkb::structures::atom::Atom;
let m = 5;
let atoms = (0..m).collect::<Vec<Atom>>();
assert_eq!(atoms.len(), 5);
```

# Notes
- In the SAT literature atoms are often called 'variables', though here there is nothing to vary.
*/

/// An atom, aka. a propositional symbol.
pub type Atom = u32;

/// The maximum instance of an atom.
pub const ATOM_MAX: Atom = Atom::MAX - 1;
