//! The fixtures shipped in `web/public` load and shape cleanly through the
//! dev-mode data source.

use std::path::PathBuf;

use ui::config::FixtureRoot;
use ui::data::{DataSource, Endpoint, FetchOutcome, FixtureDataSource, RequestPayload};
use ui::shape;

fn source() -> FixtureDataSource {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../web/public");
    FixtureDataSource::new(FixtureRoot::Directory(dir))
}

fn expect_success<T: std::fmt::Debug>(outcome: FetchOutcome<T>) -> T {
    match outcome {
        FetchOutcome::Success(value) => value,
        other => panic!("expected data, got {other:?}"),
    }
}

#[tokio::test]
async fn overview_fixture_shapes() {
    let overview = expect_success(source().get_all_graphs().await.and_then(shape::overview));
    assert!(!overview.graphs.is_empty());
    for graph in &overview.graphs {
        assert!(graph.graph.series.is_aligned());
    }
}

#[tokio::test]
async fn survey_fixture_serves_report_and_participants() {
    let source = source();
    let payload = RequestPayload::file("employee_pulse_2024.xlsx");

    let report = expect_success(
        source
            .post_data(Endpoint::SurveyInsightsReport, &payload)
            .await
            .and_then(shape::survey_report),
    );
    assert!(!report.graphs.is_empty());
    for graph in &report.graphs {
        let x = &graph.graph.series.x;
        assert!(graph.graph.series.is_aligned());
        assert!(x.windows(2).all(|w| w[0] <= w[1]), "{} is unsorted", graph.title);
    }

    let participants = expect_success(
        source
            .post_data(Endpoint::SurveyParticipantsPage, &payload)
            .await
            .and_then(shape::participants),
    );
    assert!(participants.num_of_survey_participants > 0);
}

#[tokio::test]
async fn question_fixtures_cover_detail_and_not_found() {
    let source = source();

    let detail = expect_success(
        source
            .get_detail_screen_data("Q1 Overall satisfaction")
            .await
            .and_then(shape::detail_screen),
    );
    assert_eq!(detail.segments.len(), 2);

    assert!(source.get_detail_screen_data("Q2 Recommend").await.is_not_found());
    assert!(source.get_detail_screen_data("Q404").await.is_not_found());
}
