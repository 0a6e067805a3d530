#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    Books,
    Restaurants,
}

/// One descriptive attribute: the JSON key it is read from and the label it
/// is rendered under.
pub struct AttrKey {
    pub key: &'static str,
    pub label: &'static str,
}

/// Field-name/label table for one search domain. The two UI flavors share
/// all control flow; everything that differs between them lives here.
pub struct DomainProfile {
    pub flavor: Flavor,
    pub resolved_status: &'static str,
    pub candidates_status: &'static str,
    pub id_key: &'static str,
    pub entity_key: &'static str,
    pub candidates_key: &'static str,
    pub name_key: &'static str,
    pub image_key: &'static str,
    pub rating_key: Option<&'static str>,
    pub attrs: &'static [AttrKey],
    pub labels: UiLabels,
}

pub struct UiLabels {
    pub heading: &'static str,
    pub id_label: &'static str,
    pub name_fallback: &'static str,
    pub value_fallback: &'static str,
    pub no_image: &'static str,
    pub empty_query: &'static str,
    pub no_selection: &'static str,
    pub search_not_found: &'static str,
    pub comparison_not_found: &'static str,
    pub search_failed_prefix: &'static str,
    pub comparison_failed_prefix: &'static str,
}

pub const BOOKS: DomainProfile = DomainProfile {
    flavor: Flavor::Books,
    resolved_status: "isbn_confirmed",
    candidates_status: "candidates_found",
    id_key: "isbn",
    entity_key: "book_info",
    candidates_key: "candidates",
    name_key: "title",
    image_key: "cover_image",
    rating_key: None,
    attrs: &[
        AttrKey {
            key: "author",
            label: "著者",
        },
        AttrKey {
            key: "publisher",
            label: "出版社",
        },
    ],
    labels: UiLabels {
        heading: "書籍検索・価格比較",
        id_label: "ISBN",
        name_fallback: "書名不明",
        value_fallback: "不明",
        no_image: "書影なし",
        empty_query: "検索クエリを入力してください",
        no_selection: "ISBNが選択されていません",
        search_not_found: "該当する書籍が見つかりませんでした",
        comparison_not_found: "価格情報が見つかりませんでした",
        search_failed_prefix: "検索中にエラーが発生しました",
        comparison_failed_prefix: "価格比較中にエラーが発生しました",
    },
};

pub const RESTAURANTS: DomainProfile = DomainProfile {
    flavor: Flavor::Restaurants,
    resolved_status: "restaurant_confirmed",
    candidates_status: "candidates_found",
    id_key: "restaurant_id",
    entity_key: "restaurant_info",
    candidates_key: "restaurants",
    name_key: "name",
    image_key: "image_url",
    rating_key: Some("rating"),
    attrs: &[
        AttrKey {
            key: "genre",
            label: "ジャンル",
        },
        AttrKey {
            key: "area",
            label: "エリア",
        },
    ],
    labels: UiLabels {
        heading: "レストラン検索・価格比較",
        id_label: "店舗ID",
        name_fallback: "店名不明",
        value_fallback: "不明",
        no_image: "画像なし",
        empty_query: "検索クエリを入力してください",
        no_selection: "店舗が選択されていません",
        search_not_found: "該当する店舗が見つかりませんでした",
        comparison_not_found: "価格情報が見つかりませんでした",
        search_failed_prefix: "検索中にエラーが発生しました",
        comparison_failed_prefix: "価格比較中にエラーが発生しました",
    },
};

impl DomainProfile {
    pub fn from_flavor_name(name: &str) -> Option<&'static DomainProfile> {
        match name {
            "books" => Some(&BOOKS),
            "restaurants" => Some(&RESTAURANTS),
            _ => None,
        }
    }
}
