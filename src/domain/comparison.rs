use serde::Deserialize;

/// One vendor/site row of the comparison table. The two flavors put
/// different columns on the wire; serde picks the shape by field names.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ComparisonRow {
    /// Book flavor: integer yen amounts, stock flag, server-assigned
    /// cheapest highlight.
    Offer {
        site: String,
        price: i64,
        shipping: i64,
        total_price: i64,
        condition: String,
        in_stock: bool,
        #[serde(default)]
        is_cheapest: bool,
        url: String,
    },
    /// Restaurant flavor: free-form price range plus reservation info.
    Listing {
        site: String,
        price_info: String,
        #[serde(default)]
        reservation_available: bool,
        #[serde(default)]
        features: Vec<String>,
        url: String,
    },
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn offer_row_decodes_with_defaulted_cheapest_flag() {
        let row: ComparisonRow = serde_json::from_value(json!({
            "site": "Amazon",
            "price": 1870,
            "shipping": 350,
            "total_price": 2220,
            "condition": "中古 - 良い",
            "in_stock": true,
            "url": "https://www.amazon.co.jp/dp/example"
        }))
        .unwrap();

        match row {
            ComparisonRow::Offer {
                site,
                total_price,
                is_cheapest,
                ..
            } => {
                assert_eq!(site, "Amazon");
                assert_eq!(total_price, 2220);
                assert!(!is_cheapest);
            }
            other => panic!("expected offer, got {:?}", other),
        }
    }

    #[test]
    fn listing_row_decodes_with_defaults() {
        let row: ComparisonRow = serde_json::from_value(json!({
            "site": "食べログ",
            "price_info": "¥3,000〜¥3,999",
            "url": "https://tabelog.example/restaurant/41"
        }))
        .unwrap();

        match row {
            ComparisonRow::Listing {
                reservation_available,
                features,
                ..
            } => {
                assert!(!reservation_available);
                assert!(features.is_empty());
            }
            other => panic!("expected listing, got {:?}", other),
        }
    }

    #[test]
    fn row_shapes_can_be_mixed_in_one_payload() {
        let rows: Vec<ComparisonRow> = serde_json::from_value(json!([
            {
                "site": "楽天ブックス",
                "price": 1980, "shipping": 0, "total_price": 1980,
                "condition": "新品", "in_stock": true, "is_cheapest": true,
                "url": "https://books.rakuten.example"
            },
            {
                "site": "ぐるなび",
                "price_info": "¥2,000〜",
                "reservation_available": true,
                "features": ["個室あり", "食べ放題"],
                "url": "https://gnavi.example"
            }
        ]))
        .unwrap();

        assert!(matches!(rows[0], ComparisonRow::Offer { .. }));
        assert!(matches!(rows[1], ComparisonRow::Listing { .. }));
    }
}
