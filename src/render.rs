use crate::{
    domain::{ComparisonRow, DomainProfile, Entity},
    services::{Controller, Phase},
};

/// Everything the page template needs, with all fallbacks already applied.
/// Empty collections and `None` fields mean the section is not emitted.
pub struct PageView {
    pub heading: &'static str,
    pub query: String,
    pub error: Option<String>,
    pub candidates: Vec<CandidateView>,
    pub detail: Option<EntityView>,
    pub offers: Vec<OfferView>,
    pub listings: Vec<ListingView>,
}

pub struct CandidateView {
    pub selected: bool,
    pub entity: EntityView,
}

pub struct EntityView {
    pub id: String,
    pub id_label: &'static str,
    pub name: String,
    pub attrs: Vec<AttrView>,
    pub image_url: Option<String>,
    pub no_image: &'static str,
    pub stars: Option<String>,
}

pub struct AttrView {
    pub label: &'static str,
    pub value: String,
}

pub struct OfferView {
    pub site: String,
    pub price: String,
    pub shipping: String,
    pub total_price: String,
    pub condition: String,
    pub in_stock: bool,
    pub stock_label: &'static str,
    pub cheapest: bool,
    pub url: String,
}

pub struct ListingView {
    pub site: String,
    pub price_info: String,
    pub reservation_label: &'static str,
    pub features: String,
    pub url: String,
}

/// Five-unit star scale: filled units = floor(rating) clamped to [0, 5].
pub fn stars(rating: f64) -> String {
    let filled = rating.floor().clamp(0.0, 5.0) as usize;
    let mut scale = String::new();
    for _ in 0..filled {
        scale.push('★');
    }
    for _ in filled..5 {
        scale.push('☆');
    }
    scale
}

/// Yen amount with thousands separators, e.g. `¥1,234,567`.
pub fn yen(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match amount < 0 {
        true => format!("-¥{}", grouped),
        false => format!("¥{}", grouped),
    }
}

fn entity_view(entity: &Entity, profile: &'static DomainProfile) -> EntityView {
    let labels = &profile.labels;

    EntityView {
        id: entity.id.clone(),
        id_label: labels.id_label,
        name: entity
            .name
            .clone()
            .unwrap_or_else(|| labels.name_fallback.to_string()),
        attrs: entity
            .attrs
            .iter()
            .map(|attr| AttrView {
                label: attr.label,
                value: attr
                    .value
                    .clone()
                    .unwrap_or_else(|| labels.value_fallback.to_string()),
            })
            .collect(),
        image_url: entity.image_url.clone(),
        no_image: labels.no_image,
        stars: entity.rating.map(stars),
    }
}

pub fn page_view(controller: &Controller) -> PageView {
    let profile = controller.profile();

    let (candidates, detail) = match &controller.phase {
        Phase::Idle => (vec![], None),
        Phase::Candidates { list, selected } => (
            list.iter()
                .map(|entity| CandidateView {
                    selected: selected.as_deref() == Some(entity.id.as_str()),
                    entity: entity_view(entity, profile),
                })
                .collect(),
            None,
        ),
        Phase::Detail(entity) => (vec![], Some(entity_view(entity, profile))),
    };

    let mut offers = vec![];
    let mut listings = vec![];
    if let Some(rows) = &controller.comparison {
        for row in rows {
            match row {
                ComparisonRow::Offer {
                    site,
                    price,
                    shipping,
                    total_price,
                    condition,
                    in_stock,
                    is_cheapest,
                    url,
                } => offers.push(OfferView {
                    site: site.clone(),
                    price: yen(*price),
                    shipping: yen(*shipping),
                    total_price: yen(*total_price),
                    condition: condition.clone(),
                    in_stock: *in_stock,
                    stock_label: match *in_stock {
                        true => "在庫あり",
                        false => "在庫なし",
                    },
                    cheapest: *is_cheapest,
                    url: url.clone(),
                }),
                ComparisonRow::Listing {
                    site,
                    price_info,
                    reservation_available,
                    features,
                    url,
                } => listings.push(ListingView {
                    site: site.clone(),
                    price_info: price_info.clone(),
                    reservation_label: match *reservation_available {
                        true => "予約可",
                        false => "予約不可",
                    },
                    features: features.join(" / "),
                    url: url.clone(),
                }),
            }
        }
    }

    PageView {
        heading: profile.labels.heading,
        query: controller.query.clone(),
        error: controller.error.clone(),
        candidates,
        detail,
        offers,
        listings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{profile::BOOKS, Attr};

    #[test]
    fn star_scale_floors_and_clamps() {
        assert_eq!(stars(2.9), "★★☆☆☆");
        assert_eq!(stars(5.0), "★★★★★");
        assert_eq!(stars(7.3), "★★★★★");
        assert_eq!(stars(0.4), "☆☆☆☆☆");
        assert_eq!(stars(-1.0), "☆☆☆☆☆");
    }

    #[test]
    fn yen_groups_thousands() {
        assert_eq!(yen(0), "¥0");
        assert_eq!(yen(350), "¥350");
        assert_eq!(yen(2220), "¥2,220");
        assert_eq!(yen(1234567), "¥1,234,567");
    }

    #[test]
    fn missing_fields_render_localized_placeholders() {
        let entity = Entity {
            id: "9784101001012".to_string(),
            name: None,
            attrs: vec![
                Attr {
                    label: "著者",
                    value: Some("村上春樹".to_string()),
                },
                Attr {
                    label: "出版社",
                    value: None,
                },
            ],
            image_url: None,
            rating: None,
        };

        let view = entity_view(&entity, &BOOKS);
        assert_eq!(view.name, "書名不明");
        assert_eq!(view.attrs[0].value, "村上春樹");
        assert_eq!(view.attrs[1].value, "不明");
        assert_eq!(view.image_url, None);
        assert_eq!(view.no_image, "書影なし");
        assert_eq!(view.stars, None);
    }
}
