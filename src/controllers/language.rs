use axum::Json;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::language::{self, LanguageInfo, Region};

/// Response for GET /api/languages
#[derive(Debug, Serialize)]
pub struct LanguagesResponse {
    pub languages: &'static [LanguageInfo],
    pub regions: BTreeMap<&'static str, Vec<&'static LanguageInfo>>,
    pub defaults: Vec<&'static LanguageInfo>,
}

/// GET /api/languages - Supported languages, grouped for the picker UI
pub async fn list_languages() -> Json<LanguagesResponse> {
    let regions = Region::ALL
        .iter()
        .map(|region| (region.key(), language::by_region(*region)))
        .collect();

    Json(LanguagesResponse {
        languages: language::all(),
        regions,
        defaults: language::defaults(),
    })
}
