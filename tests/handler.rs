use serde_json::Value;
use stats_lambda::{handle, StatsRequest};

fn request(x: Vec<f64>, y: Vec<f64>) -> StatsRequest {
    StatsRequest { x, y }
}

#[tokio::test]
async fn sum_of_squares_per_pair() {
    let cases: Vec<(Vec<f64>, Vec<f64>, Vec<f64>)> = vec![
        (vec![1.0], vec![2.0], vec![5.0]),
        (vec![0.0, 0.0], vec![0.0, 0.0], vec![0.0, 0.0]),
        (vec![3.0, 4.0], vec![4.0, 3.0], vec![25.0, 25.0]),
    ];
    for (x, y, expected) in cases {
        let response = handle(request(x, y), "test-request").await.unwrap();
        assert_eq!(response.statistics_list, expected);
    }
}

#[tokio::test]
async fn evaluator_failure_raises_the_json_envelope() {
    // Mismatched lengths make the evaluator itself fail; the handler never
    // checks them up front.
    let err = handle(request(vec![1.0, 2.0, 3.0], vec![1.0, 2.0]), "req-abc-123")
        .await
        .unwrap_err();
    let body: Value = serde_json::from_str(&err.to_string()).expect("error message is json");
    assert_eq!(body["errorType"], "StatisticsError");
    assert_eq!(body["httpStatus"], 400);
    assert_eq!(body["request_id"], "req-abc-123");
    let message = body["message"].as_str().expect("message is a string");
    assert!(!message.is_empty());
    assert!(!message.contains('\n'));
}

#[tokio::test]
async fn length_one_operand_recycles_instead_of_failing() {
    let response = handle(request(vec![1.0, 2.0], vec![1.0]), "req-recycle")
        .await
        .unwrap();
    assert_eq!(response.statistics_list, vec![2.0, 5.0]);
}

#[tokio::test]
async fn invocations_are_independent() {
    let first = handle(request(vec![9.0], vec![9.0]), "req-1").await.unwrap();
    assert_eq!(first.statistics_list, vec![162.0]);

    // A failed call leaves nothing behind either.
    handle(request(vec![1.0, 2.0, 3.0], vec![1.0, 2.0]), "req-2")
        .await
        .unwrap_err();

    let third = handle(request(vec![1.0], vec![2.0]), "req-3").await.unwrap();
    assert_eq!(third.statistics_list, vec![5.0]);
}

#[tokio::test]
async fn event_round_trip_through_json() {
    let event: StatsRequest =
        serde_json::from_str(r#"{ "x": [1, 2], "y": [3, 4] }"#).expect("valid event");
    let response = handle(event, "req-json").await.unwrap();
    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        serde_json::json!({ "statistics_list": [10.0, 20.0] })
    );
}
