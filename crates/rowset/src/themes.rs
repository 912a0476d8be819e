use crate::{
    order::SortOrder,
    record::Record,
    rows::{Reindex, Rows},
    sort,
};

///
/// UI theme reference table
///
/// Static mapping from logical ThemeRoller theme names to the stylesheet
/// identifiers shipped with the rendering layer. Immutable, read-only
/// lookup; absence of an entry means the theme is not offered.
///

pub const UI_THEMES: &[(&str, &str)] = &[
    ("base", "base/jquery-ui.css"),
    ("black-tie", "black-tie/jquery-ui.css"),
    ("blitzer", "blitzer/jquery-ui.css"),
    ("cupertino", "cupertino/jquery-ui.css"),
    ("dark-hive", "dark-hive/jquery-ui.css"),
    ("dot-luv", "dot-luv/jquery-ui.css"),
    ("eggplant", "eggplant/jquery-ui.css"),
    ("excite-bike", "excite-bike/jquery-ui.css"),
    ("flick", "flick/jquery-ui.css"),
    ("hot-sneaks", "hot-sneaks/jquery-ui.css"),
    ("humanity", "humanity/jquery-ui.css"),
    ("le-frog", "le-frog/jquery-ui.css"),
    ("mint-choc", "mint-choc/jquery-ui.css"),
    ("overcast", "overcast/jquery-ui.css"),
    ("pepper-grinder", "pepper-grinder/jquery-ui.css"),
    ("redmond", "redmond/jquery-ui.css"),
    ("smoothness", "smoothness/jquery-ui.css"),
    ("south-street", "south-street/jquery-ui.css"),
    ("start", "start/jquery-ui.css"),
    ("sunny", "sunny/jquery-ui.css"),
    ("swanky-purse", "swanky-purse/jquery-ui.css"),
    ("trontastic", "trontastic/jquery-ui.css"),
    ("ui-darkness", "ui-darkness/jquery-ui.css"),
    ("ui-lightness", "ui-lightness/jquery-ui.css"),
    ("vader", "vader/jquery-ui.css"),
];

/// Stylesheet identifier for a logical theme name.
#[must_use]
pub fn stylesheet(name: &str) -> Option<&'static str> {
    UI_THEMES
        .iter()
        .find(|(theme, _)| *theme == name)
        .map(|(_, sheet)| *sheet)
}

/// Name-sorted, renumbered rows for a theme selection list.
#[must_use]
pub fn selection_rows() -> Rows<Record> {
    let rows = Rows::from_values(UI_THEMES.iter().map(|(name, sheet)| {
        Record::from_fields(vec![("name", *name), ("stylesheet", *sheet)])
    }));

    sort::by_field(&rows, "name", SortOrder::Asc, Reindex::Renumber, 0)
}
