// file: src/mapper/document.rs
// description: builds meta and result documents from a single search response
// reference: fixed-path extraction from Google Custom Search responses

use crate::error::Result;
use crate::mapper::fields::{META_FIELDS, RESULT_FIELDS, collect_fields};
use crate::models::{AccountInfo, MetaDocument, ResultDocument, SearchResponse};
use serde_json::Value;

pub fn build_meta_document(
    response: &SearchResponse,
    account: &AccountInfo,
) -> Result<MetaDocument> {
    let record = collect_fields(response, account, META_FIELDS, None)?;
    Ok(serde_json::from_value(Value::Object(record))?)
}

pub fn build_result_document(
    response: &SearchResponse,
    account: &AccountInfo,
    index: usize,
) -> Result<ResultDocument> {
    let record = collect_fields(response, account, RESULT_FIELDS, Some(index))?;
    Ok(serde_json::from_value(Value::Object(record))?)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::MapperError;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    pub(crate) fn sample_response() -> Value {
        json!({
            "kind": "customsearch#search",
            "url": {
                "type": "application/json",
                "template": "https://www.googleapis.com/customsearch/v1?q={searchTerms}&num={count?}"
            },
            "queries": {
                "request": [{
                    "title": "Google Custom Search - Mister Grouse",
                    "totalResults": "0",
                    "searchTerms": "Mister Grouse",
                    "count": 10,
                    "language": "lang_en",
                    "inputEncoding": "utf8",
                    "outputEncoding": "utf8",
                    "safe": "off",
                    "cx": "003891126258438650518:fcb7zxrqavu",
                    "filter": "1",
                    "exactTerms": "asset",
                    "dateRestrict": "'2012'"
                }]
            },
            "searchInformation": {
                "searchTime": 0.161848,
                "formattedSearchTime": "0.16",
                "totalResults": "2"
            },
            "items": [
                {
                    "title": "Mister Grouse eats some cheese",
                    "link": "http://www.yellowpages.com/rio-rancho-nm/mister-grouse",
                    "snippet": "A snippet from the webpage about Mister Grouse"
                },
                {
                    "title": "Mister Grouse on the map",
                    "link": "http://maps.example.com/mister-grouse",
                    "snippet": "Directions to Mister Grouse"
                }
            ]
        })
    }

    fn account() -> AccountInfo {
        AccountInfo::new("Mister Grouse", "11111417")
    }

    #[test]
    fn test_build_meta_document() {
        let response = SearchResponse::new(sample_response());
        let meta = build_meta_document(&response, &account()).unwrap();

        assert_eq!(meta.account_holder, "Mister Grouse");
        assert_eq!(meta.account_number, "11111417");
        assert_eq!(meta.kind, "customsearch#search");
        assert_eq!(
            meta.template.as_str(),
            "https://www.googleapis.com/customsearch/v1?q={searchTerms}&num={count?}"
        );
        assert_eq!(meta.title, "Google Custom Search - Mister Grouse");
        assert_eq!(meta.search_terms, "Mister Grouse");
        assert_eq!(meta.count, 10);
        assert_eq!(meta.language, "lang_en");
        assert_eq!(meta.cx, "003891126258438650518:fcb7zxrqavu");
        assert_eq!(meta.exact_terms, "asset");
        assert_eq!(meta.date_restrict, "'2012'");
        assert_eq!(meta.search_time, 0.161848);
        assert_eq!(meta.formatted_search_time, "0.16");
    }

    #[test]
    fn test_total_results_comes_from_search_information() {
        let response = SearchResponse::new(sample_response());
        let meta = build_meta_document(&response, &account()).unwrap();
        assert_eq!(meta.total_results, "2");
    }

    #[test]
    fn test_meta_missing_field_names_path() {
        let mut value = sample_response();
        value["searchInformation"]
            .as_object_mut()
            .unwrap()
            .remove("formattedSearchTime");

        let err = build_meta_document(&SearchResponse::new(value), &account()).unwrap_err();
        match err {
            MapperError::MissingField { path } => {
                assert_eq!(path, "searchInformation.formattedSearchTime")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_meta_requires_a_request_entry() {
        let mut value = sample_response();
        value["queries"]["request"] = json!([]);

        let err = build_meta_document(&SearchResponse::new(value), &account()).unwrap_err();
        assert!(err.is_malformed_response());
    }

    #[test]
    fn test_meta_null_leaf_is_rejected() {
        let mut value = sample_response();
        value["queries"]["request"][0]["exactTerms"] = Value::Null;

        let err = build_meta_document(&SearchResponse::new(value), &account()).unwrap_err();
        match err {
            MapperError::UnexpectedShape { path, expected } => {
                assert_eq!(path, "queries.request[0].exactTerms");
                assert_eq!(expected, "string");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_build_result_document() {
        let response = SearchResponse::new(sample_response());
        let result = build_result_document(&response, &account(), 1).unwrap();

        assert_eq!(
            result,
            ResultDocument {
                account_holder: "Mister Grouse".to_string(),
                account_number: "11111417".to_string(),
                kind: "customsearch#search".to_string(),
                cx: "003891126258438650518:fcb7zxrqavu".to_string(),
                title: "Mister Grouse on the map".to_string(),
                link: "http://maps.example.com/mister-grouse".to_string(),
                snippet: "Directions to Mister Grouse".to_string(),
            }
        );
    }

    #[test]
    fn test_result_index_out_of_range() {
        let response = SearchResponse::new(sample_response());
        let err = build_result_document(&response, &account(), 2).unwrap_err();

        match err {
            MapperError::IndexOutOfRange { path, index, len } => {
                assert_eq!(path, "items[2]");
                assert_eq!(index, 2);
                assert_eq!(len, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_result_missing_snippet() {
        let mut value = sample_response();
        value["items"][0].as_object_mut().unwrap().remove("snippet");

        let err = build_result_document(&SearchResponse::new(value), &account(), 0).unwrap_err();
        match err {
            MapperError::MissingField { path } => assert_eq!(path, "items[0].snippet"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
