use super::{Relation, Schema};
use crate::{Error, Result};

struct Verify<'a> {
    schema: &'a Schema,
}

impl Schema {
    pub(super) fn verify(&self) -> Result<()> {
        Verify { schema: self }.verify()
    }
}

impl Verify<'_> {
    fn verify(&self) -> Result<()> {
        self.verify_foreign_keys_resolve()?;
        self.verify_relation_targets_exist()?;
        self.verify_through_relations_are_chained()?;
        Ok(())
    }

    fn verify_foreign_keys_resolve(&self) -> Result<()> {
        for table in self.schema.tables() {
            for column in table.columns() {
                let Some(fk) = &column.foreign_key else {
                    continue;
                };

                let resolves = self
                    .schema
                    .table(&fk.table)
                    .is_some_and(|target| target.column(&fk.column).is_some());

                if !resolves {
                    return Err(Error::invalid_schema(format!(
                        "foreign key `{}.{}` references missing column `{}.{}`",
                        table.name, column.name, fk.table, fk.column
                    )));
                }
            }
        }

        Ok(())
    }

    fn verify_relation_targets_exist(&self) -> Result<()> {
        for table in self.schema.tables() {
            for (name, relation) in table.relations() {
                if self.schema.table(relation.table()).is_none() {
                    return Err(Error::invalid_schema(format!(
                        "relationship `{}.{name}` targets missing table `{}`",
                        table.name,
                        relation.table()
                    )));
                }
            }
        }

        Ok(())
    }

    fn verify_through_relations_are_chained(&self) -> Result<()> {
        for table in self.schema.tables() {
            for (name, relation) in table.relations() {
                let Relation::HasManyThrough(rel) = relation else {
                    continue;
                };

                let chained = table
                    .relation(&rel.through)
                    .and_then(|through| self.schema.table(through.table()))
                    .is_some_and(|via| via.has_relation(&rel.related_method));

                if !chained {
                    return Err(Error::invalid_schema(format!(
                        "relationship `{}.{name}` does not chain through `{}.{}`",
                        table.name, rel.through, rel.related_method
                    )));
                }
            }
        }

        Ok(())
    }
}
