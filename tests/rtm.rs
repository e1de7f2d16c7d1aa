#[cfg(test)]
mod tests {
    use standup::api::rtm::{parse_task_list, sign, signed_params, RtmConfig, DEFAULT_API_URL};
    use standup::libs::task::TaskNames;

    #[test]
    fn test_parse_task_list_keeps_service_order() {
        let body = r#"{"rsp":{"stat":"ok","tasks":{"rev":"r1","list":[
            {"id":"1","taskseries":[
                {"id":"10","name":"Write docs","task":[{"id":"100","due":"","completed":"2021-05-14T09:00:00Z"}]},
                {"id":"11","name":"Water plants","task":[
                    {"id":"110","due":"2021-05-14T00:00:00Z","completed":"2021-05-14T08:00:00Z"},
                    {"id":"111","due":"2021-05-15T00:00:00Z","completed":"2021-05-15T08:00:00Z"}
                ]}
            ]},
            {"id":"2","taskseries":[{"id":"20","name":"Call bank","task":[{"id":"200","due":"","completed":""}]}]}
        ]}}}"#;

        let tasks = parse_task_list(body).unwrap();
        assert_eq!(tasks.names(), vec!["Write docs", "Water plants", "Water plants", "Call bank"]);
        assert_eq!(tasks[0].id.as_deref(), Some("100"));
        assert_eq!(tasks[0].due, None);
        assert_eq!(tasks[1].completed.as_deref(), Some("2021-05-14T08:00:00Z"));
        assert_eq!(tasks[3].completed, None);
    }

    #[test]
    fn test_parse_task_list_accepts_single_objects() {
        let body = r#"{"rsp":{"stat":"ok","tasks":{"list":
            {"id":"1","taskseries":{"id":"10","name":"Only task","task":{"id":"100","due":"","completed":""}}}
        }}}"#;

        let tasks = parse_task_list(body).unwrap();
        assert_eq!(tasks.names(), vec!["Only task"]);
    }

    #[test]
    fn test_parse_task_list_without_matches() {
        let body = r#"{"rsp":{"stat":"ok","tasks":{"rev":"r1"}}}"#;
        assert!(parse_task_list(body).unwrap().is_empty());

        let body = r#"{"rsp":{"stat":"ok","tasks":{"list":[{"id":"1"}]}}}"#;
        assert!(parse_task_list(body).unwrap().is_empty());
    }

    #[test]
    fn test_parse_task_list_service_error() {
        let body = r#"{"rsp":{"stat":"fail","err":{"code":"98","msg":"Login failed / Invalid auth token"}}}"#;
        let error = parse_task_list(body).unwrap_err().to_string();
        assert_eq!(error, "Login failed / Invalid auth token (code 98)");
    }

    #[test]
    fn test_parse_task_list_malformed_body() {
        let error = parse_task_list("<html>Bad gateway</html>").unwrap_err().to_string();
        assert!(error.starts_with("Unexpected Remember The Milk response"));
    }

    #[test]
    fn test_sign_matches_documented_example() {
        let params = vec![("yxz", "foo".to_string()), ("feg", "bar".to_string()), ("abc", "baz".to_string())];
        assert_eq!(sign("BANANAS", &params), "82044aae4dd676094f23f1ec152159ba");
    }

    #[test]
    fn test_sign_ignores_parameter_order() {
        let forward = vec![("api_key", "key".to_string()), ("filter", "due:today".to_string())];
        let backward = vec![("filter", "due:today".to_string()), ("api_key", "key".to_string())];

        let signature = sign("secret", &forward);
        assert_eq!(signature, sign("secret", &backward));
        assert_eq!(signature.len(), 32);
        assert_ne!(signature, sign("other secret", &forward));
    }

    #[test]
    fn test_signed_params_appends_signature() {
        let params = signed_params("secret", vec![("method", "rtm.tasks.getList".to_string())]);
        assert_eq!(params.len(), 2);
        assert_eq!(params[1].0, "api_sig");
        assert_eq!(params[1].1, sign("secret", &params[..1]));
    }

    #[test]
    fn test_config_defaults_api_url() {
        let config: RtmConfig = serde_json::from_str(r#"{"api_key":"abc"}"#).unwrap();
        assert_eq!(config.api_key, "abc");
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }
}
