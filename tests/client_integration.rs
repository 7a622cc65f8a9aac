use chrono::NaiveDate;
use rust_decimal::Decimal;

use fxrates::{Amount, CurrencyDirectory, CurrencyRateProvider, Error, ForexApiProvider};

mod test_utils {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub async fn create_rates_server(date_token: &str, mock_response: &str) -> MockServer {
        let mock_server = MockServer::start().await;
        let url_path = format!("/{date_token}");

        Mock::given(method("GET"))
            .and(path(&url_path))
            .respond_with(ResponseTemplate::new(200).set_body_string(mock_response))
            .mount(&mock_server)
            .await;

        mock_server
    }
}

#[test_log::test(tokio::test)]
async fn test_dated_request_carries_date_and_query() {
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/2021-01-01"))
        .and(query_param("base", "USD"))
        .and(query_param("symbols", "EUR"))
        .and(query_param("rtype", "fpy"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"rates": {"EUR": 0.9}}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = ForexApiProvider::new(&mock_server.uri());
    let date = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
    let rate = provider.get_rate("USD", "EUR", Some(date)).await.unwrap();
    assert_eq!(rate, Amount::Float(0.9));
}

#[test_log::test(tokio::test)]
async fn test_convert_multiplies_rate_and_amount() {
    let mock_server = test_utils::create_rates_server("latest", r#"{"rates": {"EUR": 0.85}}"#).await;

    let provider = ForexApiProvider::new(&mock_server.uri());
    let converted = provider
        .convert("USD", "EUR", Amount::from(10.0), None)
        .await
        .unwrap();
    assert_eq!(converted, Amount::Float(8.5));
}

#[test_log::test(tokio::test)]
async fn test_forced_decimal_convert_is_exact() {
    let mock_server = test_utils::create_rates_server("latest", r#"{"rates": {"EUR": 0.85}}"#).await;

    let provider = ForexApiProvider::new(&mock_server.uri()).force_decimal(true);
    let amount: Decimal = "10".parse().unwrap();
    let converted = provider
        .convert("USD", "EUR", Amount::from(amount), None)
        .await
        .unwrap();

    let expected: Decimal = "8.50".parse().unwrap();
    assert_eq!(converted, Amount::Decimal(expected));
}

#[test_log::test(tokio::test)]
async fn test_decimal_amount_switches_decoding() {
    // No force_decimal on the client; the amount type alone selects
    // exact decoding for this call.
    let mock_server = test_utils::create_rates_server("latest", r#"{"rates": {"EUR": 0.85}}"#).await;

    let provider = ForexApiProvider::new(&mock_server.uri());
    let amount: Decimal = "100".parse().unwrap();
    let converted = provider
        .convert("USD", "EUR", Amount::from(amount), None)
        .await
        .unwrap();

    let expected: Decimal = "85.00".parse().unwrap();
    assert_eq!(converted, Amount::Decimal(expected));
}

#[test_log::test(tokio::test)]
async fn test_float_amount_under_forced_decimal_is_mismatch() {
    let mock_server = test_utils::create_rates_server("latest", r#"{"rates": {"EUR": 0.85}}"#).await;

    let provider = ForexApiProvider::new(&mock_server.uri()).force_decimal(true);
    let result = provider
        .convert("USD", "EUR", Amount::from(10.0), None)
        .await;
    assert!(matches!(result, Err(Error::DecimalFloatMismatch)));
}

#[test_log::test(tokio::test)]
async fn test_identity_convert_preserves_representation() {
    let mock_server = wiremock::MockServer::start().await;

    let provider = ForexApiProvider::new(&mock_server.uri());
    let converted = provider
        .convert("USD", "USD", Amount::from(12.5), None)
        .await
        .unwrap();
    assert_eq!(converted, Amount::Float(12.5));

    let amount: Decimal = "12.5".parse().unwrap();
    let converted = provider
        .convert("EUR", "EUR", Amount::from(amount), None)
        .await
        .unwrap();
    assert_eq!(converted, Amount::Decimal(amount));

    // Forced decimal re-expresses a float amount exactly.
    let provider = ForexApiProvider::new(&mock_server.uri()).force_decimal(true);
    let converted = provider
        .convert("USD", "USD", Amount::from(10.0), None)
        .await
        .unwrap();
    assert_eq!(converted, Amount::Decimal(Decimal::from(10)));

    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[test_log::test(tokio::test)]
async fn test_error_status_fails_every_operation() {
    use wiremock::matchers::any;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let mock_server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let provider = ForexApiProvider::new(&mock_server.uri());

    let result = provider.get_rates("USD", None).await;
    assert!(matches!(result, Err(Error::RatesUnavailable(_))));

    let result = provider.get_rate("USD", "EUR", None).await;
    assert!(matches!(result, Err(Error::RatesUnavailable(_))));

    let result = provider.convert("USD", "EUR", Amount::from(10.0), None).await;
    assert!(matches!(result, Err(Error::RatesUnavailable(_))));
}

#[test]
fn test_directory_lookups() {
    let directory = CurrencyDirectory::new();

    assert_eq!(directory.get_symbol("USD"), Some("$"));
    assert_eq!(directory.get_currency_name("GBP"), Some("British Pound"));
    assert_eq!(directory.get_currency_code_from_symbol("€"), Some("EUR"));
    assert_eq!(directory.get_symbol("ZZZ"), None);
}
