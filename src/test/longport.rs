#[cfg(test)]
mod tests {
    use crate::api::{
        QuoteSource,
        longport::{Config, LongportApi, parse_quote_response, sign_request},
        longport_dto::LongportResponseDto,
    };

    const QUOTE_BODY: &str = r#"{
        "code": 0,
        "message": "success",
        "data": {
            "secu_quote": [
                {
                    "symbol": "DJT.US",
                    "last_done": "12.00",
                    "prev_close": "10.00",
                    "open": "10.10",
                    "high": "12.40",
                    "low": "9.80",
                    "timestamp": 1651075200,
                    "volume": 74829217,
                    "turnover": "857940132.000",
                    "trade_status": 0,
                    "pre_market_quote": {
                        "last_done": "10.92",
                        "timestamp": 1651057797,
                        "volume": 1112109,
                        "turnover": "12238693.000",
                        "high": "11.00",
                        "low": "10.50",
                        "prev_close": "10.00"
                    }
                },
                {
                    "symbol": "CRWV.US",
                    "last_done": "",
                    "prev_close": "98.00",
                    "open": "0.000",
                    "high": "0.000",
                    "low": "0.000",
                    "timestamp": 1651075200,
                    "volume": 0,
                    "turnover": "0.000",
                    "trade_status": 2
                }
            ]
        }
    }"#;

    fn test_config() -> Config {
        Config::new(
            "key".to_string(),
            "secret".to_string(),
            "token".to_string(),
            "https://openapi.longportapp.com".to_string(),
        )
    }

    #[test]
    fn quote_body_parses_to_snapshots() {
        let snapshots = parse_quote_response(QUOTE_BODY).unwrap();

        assert_eq!(snapshots.len(), 2);

        let djt = &snapshots[0];
        assert_eq!(djt.symbol(), "DJT.US");
        assert_eq!(djt.prev_close(), "10.00");
        assert_eq!(djt.last_done(), "12.00");
        assert_eq!(djt.pre_market(), "10.92");
        assert_eq!(djt.post_market(), "N/A");

        let crwv = &snapshots[1];
        assert_eq!(crwv.last_done(), "N/A");
        assert_eq!(crwv.pre_market(), "N/A");
        assert_eq!(crwv.post_market(), "N/A");
    }

    #[test]
    fn error_envelope_is_rejected() {
        let body = r#"{"code": 403201, "message": "signature invalid"}"#;
        let error = parse_quote_response(body).unwrap_err();

        assert!(error.to_string().contains("403201"));
        assert!(error.to_string().contains("signature invalid"));
    }

    #[test]
    fn success_without_data_is_rejected() {
        let error = parse_quote_response(r#"{"code": 0, "message": "success"}"#).unwrap_err();

        assert!(error.to_string().contains("Empty API response"));
    }

    #[test]
    fn malformed_body_is_rejected() {
        assert!(parse_quote_response("<html>upstream maintenance</html>").is_err());
    }

    #[test]
    fn envelope_tolerates_missing_message() {
        let res: LongportResponseDto = serde_json::from_str(r#"{"code": 0}"#).unwrap();

        assert_eq!(*res.code(), 0);
        assert_eq!(res.message(), "");
    }

    #[test]
    fn signature_is_deterministic() {
        let config = test_config();
        let first =
            sign_request(&config, "GET", "/v1/quote", "symbol=DJT.US", "1756000000.000").unwrap();
        let second =
            sign_request(&config, "GET", "/v1/quote", "symbol=DJT.US", "1756000000.000").unwrap();

        assert_eq!(first, second);
        assert!(first.starts_with(
            "HMAC-SHA256 SignedHeaders=authorization;x-api-key;x-timestamp, Signature="
        ));

        let signature = first.rsplit('=').next().unwrap();
        assert_eq!(signature.len(), 64);
        assert!(signature.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn signature_depends_on_the_secret() {
        let first =
            sign_request(&test_config(), "GET", "/v1/quote", "symbol=DJT.US", "1756000000.000")
                .unwrap();

        let other = Config::new(
            "key".to_string(),
            "other-secret".to_string(),
            "token".to_string(),
            "https://openapi.longportapp.com".to_string(),
        );
        let second =
            sign_request(&other, "GET", "/v1/quote", "symbol=DJT.US", "1756000000.000").unwrap();

        assert_ne!(first, second);
    }

    #[tokio::test]
    #[ignore = "requires LongPort API credentials"]
    async fn get_quote_works() {
        let config = Config::from_env().unwrap();
        let api = LongportApi::new(config);
        let result = api.quote(&["AAPL.US"]).await.unwrap();

        assert_eq!(result.first().unwrap().symbol(), "AAPL.US");
    }
}
