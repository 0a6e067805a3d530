use serde_json::Value;

use crate::domain::profile::DomainProfile;

#[derive(Debug, Clone, PartialEq)]
pub struct Attr {
    pub label: &'static str,
    pub value: Option<String>,
}

/// One search hit (a book or a restaurant), read through a [`DomainProfile`].
/// Everything except the identifier is optional; the renderer substitutes
/// placeholders for what is missing.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub id: String,
    pub name: Option<String>,
    pub attrs: Vec<Attr>,
    pub image_url: Option<String>,
    pub rating: Option<f64>,
}

/// Exactly one variant is active after a search.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Resolved(Entity),
    Candidates(Vec<Entity>),
    NotFound(Option<String>),
}

fn string_field(object: &Value, key: &str) -> Option<String> {
    match object.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

impl Entity {
    /// Reads one entity object through the profile's field table. Returns
    /// `None` when the object carries no usable identifier.
    pub fn from_value(object: &Value, profile: &DomainProfile) -> Option<Entity> {
        Self::from_value_with_id(object, profile, None)
    }

    /// Same as [`Entity::from_value`] but lets a top-level identifier win
    /// over the embedded one. The resolved search response puts the id next
    /// to the entity object, not inside it.
    pub fn from_value_with_id(
        object: &Value,
        profile: &DomainProfile,
        id_override: Option<String>,
    ) -> Option<Entity> {
        let id = match id_override {
            Some(id) => id,
            None => string_field(object, profile.id_key)?,
        };

        let attrs = profile
            .attrs
            .iter()
            .map(|a| Attr {
                label: a.label,
                value: string_field(object, a.key),
            })
            .collect();
        let rating = profile
            .rating_key
            .and_then(|key| object.get(key))
            .and_then(Value::as_f64);

        Some(Entity {
            id,
            name: string_field(object, profile.name_key),
            attrs,
            image_url: string_field(object, profile.image_key),
            rating,
        })
    }

    /// An entity known only by its identifier.
    pub fn bare(id: String, profile: &DomainProfile) -> Entity {
        Entity {
            id,
            name: None,
            attrs: profile
                .attrs
                .iter()
                .map(|a| Attr {
                    label: a.label,
                    value: None,
                })
                .collect(),
            image_url: None,
            rating: None,
        }
    }
}

impl SearchOutcome {
    /// Dispatches a search response body on its status tag. Candidates
    /// without an identifier are dropped; a candidates status with an empty
    /// (or fully dropped) list degrades to `NotFound`.
    pub fn from_response(body: &Value, profile: &DomainProfile) -> SearchOutcome {
        let status = body.get("status").and_then(Value::as_str).unwrap_or_default();
        let message = string_field(body, "message");

        if status == profile.resolved_status {
            let top_id = string_field(body, profile.id_key);
            if let Some(entity) = body
                .get(profile.entity_key)
                .and_then(|object| Entity::from_value_with_id(object, profile, top_id.clone()))
            {
                return SearchOutcome::Resolved(entity);
            }
            if let Some(id) = top_id {
                return SearchOutcome::Resolved(Entity::bare(id, profile));
            }
            return SearchOutcome::NotFound(message);
        }

        if status == profile.candidates_status {
            let candidates: Vec<Entity> = body
                .get(profile.candidates_key)
                .and_then(Value::as_array)
                .map(|list| {
                    list.iter()
                        .filter_map(|object| Entity::from_value(object, profile))
                        .collect()
                })
                .unwrap_or_default();

            if !candidates.is_empty() {
                return SearchOutcome::Candidates(candidates);
            }
        }

        SearchOutcome::NotFound(message)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::profile::{BOOKS, RESTAURANTS};

    #[test]
    fn resolved_response_prefers_top_level_id() {
        let body = json!({
            "status": "isbn_confirmed",
            "isbn": "9784101001012",
            "book_info": {
                "title": "ノルウェイの森",
                "author": "村上春樹",
                "isbn": "0000000000000"
            }
        });

        match SearchOutcome::from_response(&body, &BOOKS) {
            SearchOutcome::Resolved(entity) => {
                assert_eq!(entity.id, "9784101001012");
                assert_eq!(entity.name.as_deref(), Some("ノルウェイの森"));
            }
            other => panic!("expected resolved, got {:?}", other),
        }
    }

    #[test]
    fn resolved_response_without_entity_object_still_resolves() {
        let body = json!({ "status": "isbn_confirmed", "isbn": "9784101001012" });

        match SearchOutcome::from_response(&body, &BOOKS) {
            SearchOutcome::Resolved(entity) => {
                assert_eq!(entity.id, "9784101001012");
                assert_eq!(entity.name, None);
                assert_eq!(entity.attrs.len(), 2);
            }
            other => panic!("expected resolved, got {:?}", other),
        }
    }

    #[test]
    fn candidates_without_id_are_dropped() {
        let body = json!({
            "status": "candidates_found",
            "candidates": [
                { "title": "no id here" },
                { "isbn": "9784087520019", "title": "こころ", "author": "夏目漱石" }
            ]
        });

        match SearchOutcome::from_response(&body, &BOOKS) {
            SearchOutcome::Candidates(list) => {
                assert_eq!(list.len(), 1);
                assert_eq!(list[0].id, "9784087520019");
            }
            other => panic!("expected candidates, got {:?}", other),
        }
    }

    #[test]
    fn empty_candidate_list_degrades_to_not_found() {
        let body = json!({ "status": "candidates_found", "candidates": [] });

        assert_eq!(
            SearchOutcome::from_response(&body, &BOOKS),
            SearchOutcome::NotFound(None)
        );
    }

    #[test]
    fn unknown_status_carries_server_message() {
        let body = json!({ "status": "no_results", "message": "該当なし" });

        assert_eq!(
            SearchOutcome::from_response(&body, &BOOKS),
            SearchOutcome::NotFound(Some("該当なし".to_string()))
        );
    }

    #[test]
    fn restaurant_candidates_read_rating_and_numeric_fields() {
        let body = json!({
            "status": "candidates_found",
            "restaurants": [
                { "restaurant_id": 41, "name": "すし処 海", "rating": 4.3, "genre": "寿司" }
            ]
        });

        match SearchOutcome::from_response(&body, &RESTAURANTS) {
            SearchOutcome::Candidates(list) => {
                assert_eq!(list[0].id, "41");
                assert_eq!(list[0].rating, Some(4.3));
                assert_eq!(list[0].attrs[0].value.as_deref(), Some("寿司"));
                assert_eq!(list[0].attrs[1].value, None);
            }
            other => panic!("expected candidates, got {:?}", other),
        }
    }
}
