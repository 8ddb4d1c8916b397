mod belongs_to;
pub use belongs_to::BelongsTo;

mod belongs_to_many;
pub use belongs_to_many::BelongsToMany;

mod has_many;
pub use has_many::HasMany;

mod has_many_through;
pub use has_many_through::HasManyThrough;

mod has_one;
pub use has_one::HasOne;

use serde::Serialize;
use std::fmt;

/// A resolved relationship, keyed by name in its owning table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Relation {
    BelongsTo(BelongsTo),
    HasOne(HasOne),
    HasMany(HasMany),
    BelongsToMany(BelongsToMany),
    HasManyThrough(HasManyThrough),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RelationKind {
    BelongsTo,
    HasOne,
    HasMany,
    BelongsToMany,
    HasManyThrough,
}

impl Relation {
    pub fn kind(&self) -> RelationKind {
        match self {
            Relation::BelongsTo(_) => RelationKind::BelongsTo,
            Relation::HasOne(_) => RelationKind::HasOne,
            Relation::HasMany(_) => RelationKind::HasMany,
            Relation::BelongsToMany(_) => RelationKind::BelongsToMany,
            Relation::HasManyThrough(_) => RelationKind::HasManyThrough,
        }
    }

    /// The related table.
    pub fn table(&self) -> &str {
        match self {
            Relation::BelongsTo(rel) => &rel.table,
            Relation::HasOne(rel) => &rel.table,
            Relation::HasMany(rel) => &rel.table,
            Relation::BelongsToMany(rel) => &rel.table,
            Relation::HasManyThrough(rel) => &rel.table,
        }
    }

    /// The related model.
    pub fn model(&self) -> &str {
        match self {
            Relation::BelongsTo(rel) => &rel.model,
            Relation::HasOne(rel) => &rel.model,
            Relation::HasMany(rel) => &rel.model,
            Relation::BelongsToMany(rel) => &rel.model,
            Relation::HasManyThrough(rel) => &rel.model,
        }
    }

    pub fn primary_key(&self) -> &str {
        match self {
            Relation::BelongsTo(rel) => &rel.primary_key,
            Relation::HasOne(rel) => &rel.primary_key,
            Relation::HasMany(rel) => &rel.primary_key,
            Relation::BelongsToMany(rel) => &rel.primary_key,
            Relation::HasManyThrough(rel) => &rel.primary_key,
        }
    }

    pub fn foreign_key(&self) -> &str {
        match self {
            Relation::BelongsTo(rel) => &rel.foreign_key,
            Relation::HasOne(rel) => &rel.foreign_key,
            Relation::HasMany(rel) => &rel.foreign_key,
            Relation::BelongsToMany(rel) => &rel.foreign_key,
            Relation::HasManyThrough(rel) => &rel.foreign_key,
        }
    }

    /// Whether a further hop may be taken from this relationship when
    /// discovering `hasManyThrough` relationships.
    pub fn is_chainable(&self) -> bool {
        !matches!(self, Relation::BelongsTo(_))
    }

    pub fn is_belongs_to(&self) -> bool {
        matches!(self, Self::BelongsTo(..))
    }

    pub fn as_belongs_to(&self) -> Option<&BelongsTo> {
        match self {
            Self::BelongsTo(rel) => Some(rel),
            _ => None,
        }
    }

    #[track_caller]
    pub fn expect_belongs_to(&self) -> &BelongsTo {
        match self {
            Self::BelongsTo(rel) => rel,
            _ => panic!("expected relation to be `BelongsTo`, but was {self:?}"),
        }
    }

    pub fn is_has_one(&self) -> bool {
        matches!(self, Self::HasOne(..))
    }

    #[track_caller]
    pub fn expect_has_one(&self) -> &HasOne {
        match self {
            Self::HasOne(rel) => rel,
            _ => panic!("expected relation to be `HasOne`, but was {self:?}"),
        }
    }

    pub fn is_has_many(&self) -> bool {
        matches!(self, Self::HasMany(..))
    }

    #[track_caller]
    pub fn expect_has_many(&self) -> &HasMany {
        match self {
            Self::HasMany(rel) => rel,
            _ => panic!("expected relation to be `HasMany`, but was {self:?}"),
        }
    }

    pub fn is_belongs_to_many(&self) -> bool {
        matches!(self, Self::BelongsToMany(..))
    }

    pub fn as_belongs_to_many(&self) -> Option<&BelongsToMany> {
        match self {
            Self::BelongsToMany(rel) => Some(rel),
            _ => None,
        }
    }

    #[track_caller]
    pub fn expect_belongs_to_many(&self) -> &BelongsToMany {
        match self {
            Self::BelongsToMany(rel) => rel,
            _ => panic!("expected relation to be `BelongsToMany`, but was {self:?}"),
        }
    }

    pub fn is_has_many_through(&self) -> bool {
        matches!(self, Self::HasManyThrough(..))
    }

    #[track_caller]
    pub fn expect_has_many_through(&self) -> &HasManyThrough {
        match self {
            Self::HasManyThrough(rel) => rel,
            _ => panic!("expected relation to be `HasManyThrough`, but was {self:?}"),
        }
    }
}

impl RelationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RelationKind::BelongsTo => "belongsTo",
            RelationKind::HasOne => "hasOne",
            RelationKind::HasMany => "hasMany",
            RelationKind::BelongsToMany => "belongsToMany",
            RelationKind::HasManyThrough => "hasManyThrough",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
