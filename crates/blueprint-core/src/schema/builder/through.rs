use super::BuildSchema;
use crate::schema::{relation::HasManyThrough, Relation};
use crate::{err, Result};

use indexmap::IndexSet;
use tracing::debug;

/// A `hasManyThrough` waiting to be registered.
struct Candidate {
    owner: String,
    name: String,
    relation: HasManyThrough,
}

impl BuildSchema<'_> {
    /// Second pass: repeatedly scans every table for a chainable
    /// relationship followed by another chainable hop, synthesizing one
    /// `hasManyThrough` per scan, until a full scan finds nothing new.
    ///
    /// Every synthesized name is an existing relationship name and is never
    /// registered twice on one table, so the number of additions is bounded
    /// by `tables * distinct names`.
    pub(super) fn discover_through(&mut self) -> Result<()> {
        let names = self
            .tables
            .values()
            .flat_map(|table| table.relations.keys())
            .collect::<IndexSet<_>>()
            .len();
        let limit = self.tables.len() * names;

        let mut added = 0;

        while let Some(candidate) = self.next_through() {
            if added == limit {
                return Err(err!(
                    "relationship discovery did not converge after {limit} additions"
                ));
            }

            let Candidate {
                owner,
                name,
                relation,
            } = candidate;

            self.insert_relation(&owner, name, relation.into())?;
            added += 1;
        }

        debug!(added, "discovered through relationships");
        Ok(())
    }

    fn next_through(&self) -> Option<Candidate> {
        for (owner, table) in &self.tables {
            for (through, relation) in table.relations() {
                if !relation.is_chainable() {
                    continue;
                }

                let Some(via) = self.tables.get(relation.table()) else {
                    continue;
                };

                for (name, hop) in via.relations() {
                    if !hop.is_chainable()
                        || hop.table() == owner.as_str()
                        || table.has_relation(name)
                    {
                        continue;
                    }

                    return Some(Candidate {
                        owner: owner.clone(),
                        name: name.to_string(),
                        relation: through_relation(through, relation, name, hop),
                    });
                }
            }
        }

        None
    }
}

fn through_relation(
    through: &str,
    relation: &Relation,
    name: &str,
    hop: &Relation,
) -> HasManyThrough {
    HasManyThrough {
        table: hop.table().to_string(),
        model: hop.model().to_string(),
        through: through.to_string(),
        through_model: relation.model().to_string(),
        related_method: name.to_string(),
        primary_key: relation.primary_key().to_string(),
        foreign_key: relation.foreign_key().to_string(),
    }
}
