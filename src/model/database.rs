use std::collections::HashMap;
use std::fmt;
use std::ops::Deref;

use thiserror::Error;
use tracing::{info, warn};

use super::entities::{CloseApproach, NearEarthObject};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LinkError {
    #[error("close approach references unknown NEO {designation:?}")]
    UnknownDesignation { designation: String },
}

/// A close approach together with the NEO it belongs to.
///
/// Only the database hands these out, so the link is always resolved.
#[derive(Debug, Clone, Copy)]
pub struct ApproachRef<'db> {
    approach: &'db CloseApproach,
    neo: &'db NearEarthObject,
}

impl<'db> ApproachRef<'db> {
    pub fn neo(&self) -> &'db NearEarthObject {
        self.neo
    }
}

impl Deref for ApproachRef<'_> {
    type Target = CloseApproach;

    fn deref(&self) -> &CloseApproach {
        self.approach
    }
}

impl fmt::Display for ApproachRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "At {}, '{}' approaches Earth at a distance of {:.2} au and a velocity of {:.2} km/s.",
            self.approach.time_str(),
            self.neo.fullname(),
            self.approach.distance(),
            self.approach.velocity()
        )
    }
}

/// In-memory, read-only collection of NEOs and their close approaches.
///
/// Links between the two record types are positions into the flat `neos` and
/// `approaches` vectors; nothing is mutated after [`NeoDatabase::load`].
#[derive(Debug, Default)]
pub struct NeoDatabase {
    neos: Vec<NearEarthObject>,
    approaches: Vec<CloseApproach>,
    by_designation: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
    orphans: usize,
}

impl NeoDatabase {
    /// Index the NEOs and link every approach to its NEO.
    ///
    /// Approaches whose designation matches no NEO are logged and dropped. A
    /// repeated NEO designation keeps the first record.
    pub fn load(neos: Vec<NearEarthObject>, approaches: Vec<CloseApproach>) -> Self {
        let mut db = NeoDatabase {
            neos: Vec::with_capacity(neos.len()),
            approaches: Vec::with_capacity(approaches.len()),
            by_designation: HashMap::with_capacity(neos.len()),
            ..Default::default()
        };

        for neo in neos {
            if db.by_designation.contains_key(neo.designation()) {
                warn!(designation = neo.designation(), "Skipping duplicate NEO designation");
                continue;
            }
            let idx = db.neos.len();
            db.by_designation.insert(neo.designation().to_string(), idx);
            if let Some(name) = neo.name() {
                db.by_name.entry(name.to_string()).or_insert(idx);
            }
            db.neos.push(neo);
        }

        for mut approach in approaches {
            match db.by_designation.get(approach.designation()) {
                Some(&neo_idx) => {
                    approach.link(neo_idx);
                    db.neos[neo_idx].approaches.push(db.approaches.len());
                    db.approaches.push(approach);
                }
                None => {
                    let err = LinkError::UnknownDesignation {
                        designation: approach.designation().to_string(),
                    };
                    warn!(error = %err, time = %approach.time_str(), "Skipping orphan close approach");
                    db.orphans += 1;
                }
            }
        }

        info!(
            neos = db.neos.len(),
            approaches = db.approaches.len(),
            orphans = db.orphans,
            "Loaded NEO database"
        );
        db
    }

    pub fn get_neo_by_designation(&self, designation: &str) -> Option<&NearEarthObject> {
        self.by_designation.get(designation).map(|&idx| &self.neos[idx])
    }

    pub fn get_neo_by_name(&self, name: &str) -> Option<&NearEarthObject> {
        self.by_name.get(name).map(|&idx| &self.neos[idx])
    }

    /// All linked approaches in load order. Each call starts from the beginning.
    pub fn approaches(&self) -> impl Iterator<Item = ApproachRef<'_>> + '_ {
        self.approaches.iter().filter_map(move |a| self.resolve(a))
    }

    /// Approaches of one NEO from this database, in load order.
    pub fn approaches_of<'db>(
        &'db self,
        neo: &'db NearEarthObject,
    ) -> impl Iterator<Item = ApproachRef<'db>> + 'db {
        neo.approaches
            .iter()
            .filter_map(move |&idx| self.approaches.get(idx))
            .filter_map(move |a| self.resolve(a))
    }

    pub fn neos(&self) -> impl Iterator<Item = &NearEarthObject> + '_ {
        self.neos.iter()
    }

    pub fn neo_count(&self) -> usize {
        self.neos.len()
    }

    pub fn approach_count(&self) -> usize {
        self.approaches.len()
    }

    /// Number of approaches dropped during load for lack of a matching NEO.
    pub fn orphan_count(&self) -> usize {
        self.orphans
    }

    fn resolve<'db>(&'db self, approach: &'db CloseApproach) -> Option<ApproachRef<'db>> {
        let neo = self.neos.get(approach.neo_index()?)?;
        Some(ApproachRef { approach, neo })
    }
}
