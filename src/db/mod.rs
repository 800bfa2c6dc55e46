/*!
Databases for holding information relevant to a knowledge base.

- The [atom database](atom) maps the external names of atoms to their internal representation, and back.
- The [clause database](clause) is the formula of the knowledge base, an ordered collection of clauses.

Neither database is read during a query except to build the working set of clauses, which is private to the [resolution procedure](crate::procedures::resolution).
*/

pub mod atom;
pub mod clause;
