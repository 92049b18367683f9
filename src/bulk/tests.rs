//! Bulk Module Tests
//!
//! ## Test Scopes
//! - **Parser**: Framing rules, single-line deletes, rejection of malformed bodies.
//! - **Executor**: Per-item isolation, conflicts, not-found deletes, envelope `errors` flag.
//! - **Serialization**: Items render as `{"<action>": {...}}`.

#[cfg(test)]
mod tests {
    use crate::bulk::executor::execute_bulk;
    use crate::bulk::parser::parse_bulk;
    use crate::bulk::protocol::{BulkAction, BulkResponse};
    use crate::mapping::normalize::normalize_mappings;
    use crate::store::registry::Cluster;
    use serde_json::json;
    use std::sync::Arc;

    fn run(cluster: &Cluster, default_index: Option<&str>, body: &str) -> BulkResponse {
        let entries = parse_bulk(body).expect("body should be well framed");
        execute_bulk(cluster, default_index, entries)
    }

    fn integer_cluster() -> Arc<Cluster> {
        let cluster = Cluster::new();
        cluster
            .get_or_create("logs")
            .set_mappings(normalize_mappings(&json!({
                "properties": {"n": {"type": "integer"}}
            })));
        cluster
    }

    // ============================================================
    // PARSER TESTS
    // ============================================================

    #[test]
    fn test_parse_index_and_delete_entries() {
        let body = concat!(
            "{\"index\":{\"_index\":\"logs\",\"_id\":\"1\"}}\n",
            "{\"msg\":\"a\"}\n",
            "{\"delete\":{\"_index\":\"logs\",\"_id\":\"2\"}}\n",
            "{\"create\":{\"_index\":\"logs\"}}\n",
            "{\"msg\":\"b\"}\n",
        );

        let entries = parse_bulk(body).unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].header.action, Some(BulkAction::Index));
        assert_eq!(entries[0].header.id.as_deref(), Some("1"));
        assert_eq!(entries[0].payload, Some("{\"msg\":\"a\"}"));
        assert_eq!(entries[1].header.action, Some(BulkAction::Delete));
        assert_eq!(entries[1].payload, None);
        assert_eq!(entries[2].header.action, Some(BulkAction::Create));
        assert_eq!(entries[2].header.id, None);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let body = "\n{\"index\":{\"_index\":\"logs\"}}\n\n   \n{\"a\":1}\n\n";
        assert_eq!(parse_bulk(body).unwrap().len(), 1);
    }

    #[test]
    fn test_parse_empty_body() {
        assert!(parse_bulk("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_missing_payload() {
        let body = "{\"index\":{\"_index\":\"logs\"}}\n{\"a\":1}\n{\"index\":{\"_index\":\"logs\"}}\n";

        let err = parse_bulk(body).unwrap_err();
        assert_eq!(err.status().as_u16(), 400);
        assert!(err.to_string().contains("malformed bulk request"));
    }

    #[test]
    fn test_parse_rejects_bad_action_lines() {
        assert!(parse_bulk("not json\n{}\n").is_err());
        assert!(parse_bulk("{}\n{}\n").is_err());
        assert!(parse_bulk("{\"index\":{},\"delete\":{}}\n{}\n").is_err());
        assert!(parse_bulk("{\"index\":\"logs\"}\n{}\n").is_err());
    }

    #[test]
    fn test_parse_numeric_id() {
        let entries = parse_bulk("{\"delete\":{\"_index\":\"logs\",\"_id\":7}}\n").unwrap();
        assert_eq!(entries[0].header.id.as_deref(), Some("7"));
    }

    #[test]
    fn test_parse_empty_id_is_kept() {
        let entries =
            parse_bulk("{\"index\":{\"_index\":\"\",\"_id\":\"\"}}\n{\"a\":1}\n").unwrap();
        assert_eq!(entries[0].header.index, None);
        assert_eq!(entries[0].header.id.as_deref(), Some(""));
    }

    #[test]
    fn test_parse_unknown_action_consumes_payload() {
        let body = "{\"update\":{\"_index\":\"logs\",\"_id\":\"1\"}}\n{\"doc\":{}}\n";

        let entries = parse_bulk(body).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].header.action, None);
        assert_eq!(entries[0].header.name, "update");
    }

    // ============================================================
    // EXECUTOR TESTS
    // ============================================================

    #[test]
    fn test_all_successful_items() {
        let cluster = Cluster::new();
        let body = concat!(
            "{\"index\":{\"_index\":\"logs\"}}\n{\"msg\":\"a\"}\n",
            "{\"index\":{\"_index\":\"logs\"}}\n{\"msg\":\"b\"}\n",
        );

        let response = run(&cluster, None, body);

        assert!(!response.errors);
        assert_eq!(response.items.len(), 2);
        assert!(response.items.iter().all(|i| i.result.status == 201));
        assert_eq!(response.items[0].result.id.as_deref(), Some("1"));
        assert_eq!(response.items[1].result.id.as_deref(), Some("2"));
        assert_eq!(cluster.get("logs").unwrap().documents().len(), 2);
    }

    #[test]
    fn test_invalid_item_does_not_block_valid_item() {
        let cluster = integer_cluster();
        let body = concat!(
            "{\"index\":{\"_index\":\"logs\",\"_id\":\"bad\"}}\n{\"n\":\"abc\"}\n",
            "{\"index\":{\"_index\":\"logs\",\"_id\":\"good\"}}\n{\"n\":\"42\"}\n",
        );

        let response = run(&cluster, None, body);

        assert!(response.errors);
        let bad = &response.items[0].result;
        assert_eq!(bad.status, 400);
        assert_eq!(
            bad.error.as_ref().map(|e| e.error_type.as_str()),
            Some("mapper_parsing_exception")
        );
        let good = &response.items[1].result;
        assert_eq!(good.status, 201);
        assert_eq!(good.result.as_deref(), Some("created"));

        let docs = cluster.get("logs").unwrap();
        assert!(!docs.documents().contains("bad"));
        assert!(docs.documents().contains("good"));
    }

    #[test]
    fn test_create_conflict_keeps_version() {
        let cluster = Cluster::new();
        run(
            &cluster,
            None,
            "{\"index\":{\"_index\":\"logs\",\"_id\":\"a\"}}\n{\"v\":1}\n",
        );

        let response = run(
            &cluster,
            None,
            "{\"create\":{\"_index\":\"logs\",\"_id\":\"a\"}}\n{\"v\":2}\n",
        );

        assert!(response.errors);
        let item = &response.items[0];
        assert_eq!(item.action, "create");
        assert_eq!(item.result.status, 409);
        assert_eq!(item.result.result.as_deref(), Some("conflict"));
        assert_eq!(
            item.result.error.as_ref().map(|e| e.error_type.as_str()),
            Some("version_conflict_engine_exception")
        );

        let stored = cluster.get("logs").unwrap().documents().get("a").unwrap();
        assert_eq!(stored.version, 1);
        assert_eq!(stored.source["v"], json!(1));
    }

    #[test]
    fn test_index_action_updates_existing() {
        let cluster = Cluster::new();
        let body = "{\"index\":{\"_index\":\"logs\",\"_id\":\"a\"}}\n{\"v\":1}\n";

        run(&cluster, None, body);
        let response = run(&cluster, None, body);

        let item = &response.items[0].result;
        assert_eq!(item.status, 200);
        assert_eq!(item.version, Some(2));
        assert_eq!(item.result.as_deref(), Some("updated"));
        assert!(!response.errors);
    }

    #[test]
    fn test_delete_existing_and_missing() {
        let cluster = Cluster::new();
        run(
            &cluster,
            None,
            "{\"index\":{\"_index\":\"logs\",\"_id\":\"a\"}}\n{}\n",
        );

        let body = concat!(
            "{\"delete\":{\"_index\":\"logs\",\"_id\":\"a\"}}\n",
            "{\"delete\":{\"_index\":\"logs\",\"_id\":\"missing\"}}\n",
            "{\"index\":{\"_index\":\"logs\",\"_id\":\"b\"}}\n{}\n",
        );
        let response = run(&cluster, None, body);

        assert_eq!(response.items[0].result.status, 200);
        assert_eq!(response.items[0].result.result.as_deref(), Some("deleted"));
        assert_eq!(response.items[1].result.status, 404);
        assert_eq!(response.items[1].result.result.as_deref(), Some("not_found"));
        assert_eq!(response.items[2].result.status, 201);
        // A not-found delete still flags the envelope.
        assert!(response.errors);

        let index = cluster.get("logs").unwrap();
        assert!(!index.documents().contains("a"));
        assert!(index.documents().contains("b"));
    }

    #[test]
    fn test_missing_index_is_invalid_index() {
        let cluster = Cluster::new();
        let body = concat!(
            "{\"index\":{}}\n{\"a\":1}\n",
            "{\"index\":{\"_index\":\"logs\"}}\n{\"a\":2}\n",
        );

        let response = run(&cluster, None, body);

        let item = &response.items[0].result;
        assert_eq!(item.status, 400);
        assert_eq!(
            item.error.as_ref().map(|e| e.error_type.as_str()),
            Some("invalid_index")
        );
        assert_eq!(response.items[1].result.status, 201);
        assert_eq!(cluster.index_names(), vec!["logs"]);
    }

    #[test]
    fn test_empty_id_is_stored_as_given() {
        let cluster = Cluster::new();
        let body = "{\"index\":{\"_index\":\"logs\",\"_id\":\"\"}}\n{\"a\":1}\n";

        let response = run(&cluster, None, body);

        assert!(!response.errors);
        assert_eq!(response.items[0].result.id.as_deref(), Some(""));
        let state = cluster.get("logs").unwrap();
        assert!(state.documents().get("").is_some());
        assert_eq!(state.documents().len(), 1);
    }

    #[test]
    fn test_default_index_from_path() {
        let cluster = Cluster::new();
        let body = concat!(
            "{\"index\":{}}\n{\"a\":1}\n",
            "{\"index\":{\"_index\":\"other\"}}\n{\"a\":2}\n",
        );

        let response = run(&cluster, Some("logs"), body);

        assert!(!response.errors);
        assert_eq!(response.items[0].result.index.as_deref(), Some("logs"));
        assert_eq!(response.items[1].result.index.as_deref(), Some("other"));
    }

    #[test]
    fn test_unknown_action_fails_only_its_item() {
        let cluster = Cluster::new();
        let body = concat!(
            "{\"update\":{\"_index\":\"logs\",\"_id\":\"1\"}}\n{\"doc\":{\"a\":1}}\n",
            "{\"index\":{\"_index\":\"logs\",\"_id\":\"2\"}}\n{\"a\":2}\n",
        );

        let response = run(&cluster, None, body);

        assert_eq!(response.items[0].action, "update");
        assert_eq!(response.items[0].result.status, 400);
        assert_eq!(response.items[1].result.status, 201);
        assert!(response.errors);
    }

    #[test]
    fn test_unparseable_payload_fails_only_its_item() {
        let cluster = Cluster::new();
        let body = concat!(
            "{\"index\":{\"_index\":\"logs\"}}\n{broken\n",
            "{\"index\":{\"_index\":\"logs\"}}\n{\"a\":1}\n",
        );

        let response = run(&cluster, None, body);

        let item = &response.items[0].result;
        assert_eq!(item.status, 400);
        assert_eq!(
            item.error.as_ref().map(|e| e.error_type.as_str()),
            Some("mapper_parsing_exception")
        );
        assert_eq!(response.items[1].result.status, 201);
    }

    #[test]
    fn test_bulk_and_single_writes_share_versions() {
        let cluster = Cluster::new();
        crate::documents::service::index_document(
            &cluster,
            "logs",
            Some("a".to_string()),
            serde_json::Map::new(),
        )
        .unwrap();

        let response = run(
            &cluster,
            None,
            "{\"index\":{\"_index\":\"logs\",\"_id\":\"a\"}}\n{}\n",
        );

        assert_eq!(response.items[0].result.version, Some(2));
    }

    // ============================================================
    // SERIALIZATION TESTS
    // ============================================================

    #[test]
    fn test_response_serialization_shape() {
        let cluster = Cluster::new();
        let response = run(
            &cluster,
            None,
            "{\"index\":{\"_index\":\"logs\",\"_id\":\"a\"}}\n{\"msg\":\"x\"}\n",
        );

        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["errors"], json!(false));
        assert_eq!(value["took"], json!(1));
        assert_eq!(
            value["items"][0],
            json!({
                "index": {
                    "_index": "logs",
                    "_type": "_doc",
                    "_id": "a",
                    "_version": 1,
                    "result": "created",
                    "status": 201
                }
            })
        );
    }

    #[test]
    fn test_error_item_serialization_shape() {
        let cluster = Cluster::new();
        let response = run(&cluster, None, "{\"index\":{}}\n{}\n");

        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["errors"], json!(true));
        assert_eq!(value["items"][0]["index"]["status"], json!(400));
        assert_eq!(
            value["items"][0]["index"]["error"]["type"],
            json!("invalid_index")
        );
        assert!(value["items"][0]["index"].get("_index").is_none());
    }
}
