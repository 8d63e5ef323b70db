//! Generation-by-generation pedigree construction.
//!
//! Ids are sequential (`"1"`, `"2"`, ...) in creation order, so a person's
//! ancestors always have smaller ids unless a loop was injected.

use kinship_core::{FamilyFile, PersonId, PersonRecord, RelationshipEdge, RelationshipType};
use rand::Rng;
use rand::rngs::StdRng;

use super::GeneratorConfig;
use super::names::{given_name, surname};

/// A married pair that may have children; `blood` carries the family name.
struct Couple {
    blood: PersonId,
    partner: PersonId,
    surname: &'static str,
}

struct Builder<'a> {
    config: &'a GeneratorConfig,
    rng: &'a mut StdRng,
    people: Vec<PersonRecord>,
    relationships: Vec<RelationshipEdge>,
    first_link: Option<(PersonId, PersonId)>,
}

impl Builder<'_> {
    fn person(&mut self, family_name: &str) -> PersonId {
        let id = PersonId::from(self.people.len() as u64 + 1);
        let record = PersonRecord::new(id.clone())
            .with_first_name(given_name(self.rng))
            .with_last_name(family_name);
        self.people.push(record);
        id
    }

    fn parent_link(&mut self, parent: &PersonId, child: &PersonId) {
        let row = if self.rng.gen_bool(self.config.child_row_rate) {
            RelationshipEdge::new(child.clone(), parent.clone(), RelationshipType::Child)
        } else {
            RelationshipEdge::parent(parent.clone(), child.clone())
        };
        self.relationships.push(row);
        if self.first_link.is_none() {
            self.first_link = Some((parent.clone(), child.clone()));
        }
    }

    fn marry(&mut self, blood: PersonId, family_name: &'static str) -> Couple {
        let partner_surname = surname(self.rng);
        let partner = self.person(partner_surname);
        self.relationships
            .push(RelationshipEdge::spouse(blood.clone(), partner.clone()));
        Couple {
            blood,
            partner,
            surname: family_name,
        }
    }
}

/// Builds the full family document.
pub fn build_pedigree(config: &GeneratorConfig, rng: &mut StdRng) -> FamilyFile {
    let mut b = Builder {
        config,
        rng,
        people: Vec::new(),
        relationships: Vec::new(),
        first_link: None,
    };

    let mut couples: Vec<Couple> = Vec::with_capacity(config.founder_couples);
    for _ in 0..config.founder_couples {
        let family_name = surname(b.rng);
        let founder = b.person(family_name);
        couples.push(b.marry(founder, family_name));
    }

    for _ in 1..config.generations {
        let mut next: Vec<Couple> = Vec::new();
        for couple in &couples {
            let children = b.rng.gen_range(0..=config.max_children);
            for _ in 0..children {
                let child = b.person(couple.surname);
                b.parent_link(&couple.blood, &child);
                if !b.rng.gen_bool(config.missing_parent_rate) {
                    b.parent_link(&couple.partner, &child);
                }

                if !b.rng.gen_bool(config.marriage_rate) {
                    continue;
                }
                next.push(b.marry(child.clone(), couple.surname));
                if b.rng.gen_bool(config.remarriage_rate) {
                    next.push(b.marry(child, couple.surname));
                }
            }
        }
        couples = next;
    }

    if config.inject_cycles {
        if let Some((parent, child)) = b.first_link.clone() {
            b.relationships.push(RelationshipEdge::parent(child, parent));
        }
    }

    FamilyFile {
        people: b.people,
        relationships: b.relationships,
        ..FamilyFile::default()
    }
}
