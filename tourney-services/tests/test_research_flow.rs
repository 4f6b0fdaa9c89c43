//! End-to-end research flow against an in-memory research source
//!
//! Run with: cargo test -p tourney-services --test test_research_flow

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;
use tourney_core::{MatchupRequest, TournamentRequest, TourneyError, TourneyResult};
use tourney_research::perplexity::upstream_error;
use tourney_research::{ResearchAnswer, ResearchPrompt, ResearchSource};
use tourney_services::ResearchService;

/// Replies with a fixed answer and remembers every prompt it was asked
struct CannedSource {
    reply: TourneyResult<ResearchAnswer>,
    prompts: Mutex<Vec<ResearchPrompt>>,
}

impl CannedSource {
    fn answering(content: &str, citations: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(ResearchAnswer::new(
                content,
                citations.iter().map(|c| c.to_string()).collect(),
            )),
            prompts: Mutex::new(Vec::new()),
        })
    }

    fn failing(error: TourneyError) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(error),
            prompts: Mutex::new(Vec::new()),
        })
    }

    fn asked(&self) -> Vec<ResearchPrompt> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ResearchSource for CannedSource {
    async fn ask(&self, prompt: &ResearchPrompt) -> TourneyResult<ResearchAnswer> {
        self.prompts.lock().unwrap().push(prompt.clone());
        self.reply.clone()
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}

const BRACKET_ANSWER: &str = "Here is the current bracket [1].\n\n\
## Round of 16\n\
(1) Duke vs (16) Mercer - March 21, 2025, 7:10 PM ET\n\
(2) Kentucky vs (15) Belmont - March 21, 2025, 9:40 PM ET\n\n\
## Quarterfinals\n\
Matchups will be set after the Round of 16 [2].";

#[tokio::test]
async fn test_tournament_research_builds_bracket() {
    init_tracing();
    let source = CannedSource::answering(
        BRACKET_ANSWER,
        &["https://www.espn.com/bracket", "https://si.com/preview"],
    );
    let service = ResearchService::new(source.clone());

    let response = service
        .research_tournament(&TournamentRequest::new("Basketball", "NCAA Tournament"))
        .await
        .unwrap();

    let bracket = &response.bracket;
    assert_eq!(bracket.sport, "Basketball");
    assert_eq!(bracket.tournament, "NCAA Tournament");

    // "Matchups will be set after the Round of 16" is itself a header line, so the
    // empty Quarterfinals round is replaced and then discarded as well
    assert_eq!(bracket.rounds.len(), 1);
    assert_eq!(bracket.rounds[0].round_name, "Round of 16");

    let first = bracket.first_matchup().unwrap();
    assert_eq!(first.team1, "Duke");
    assert_eq!(first.team2, "Mercer");
    assert_eq!(first.seed1, Some(1));
    assert_eq!(first.seed2, Some(16));
    assert_eq!(first.date.as_deref(), Some("March 21, 2025"));
    assert_eq!(first.time.as_deref(), Some("7:10 PM ET"));

    assert!(response.research.starts_with("<p>Here is the current bracket <sup>"));
    assert!(response.research.contains(r#"href="https://si.com/preview""#));

    let prompts = source.asked();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].user.contains("NCAA Tournament Basketball tournament"));
}

#[tokio::test]
async fn test_tournament_research_falls_back_to_placeholder() {
    let source = CannedSource::answering("The bracket has not been announced yet.", &[]);
    let service = ResearchService::new(source);

    let response = service
        .research_tournament(&TournamentRequest::new("Football", "Bowl Season"))
        .await
        .unwrap();

    assert_eq!(response.bracket.rounds.len(), 1);
    assert_eq!(response.bracket.rounds[0].round_name, "First Round");
    assert_eq!(response.bracket.total_matchups(), 2);
    assert_eq!(response.research, "<p>The bracket has not been announced yet.</p>");
}

#[tokio::test]
async fn test_matchup_research_with_prediction_block() {
    let content = "Duke is 30-3 this season [1] while Mercer won its conference [2].\n\n\
PREDICTION:\n\
Winner: **Duke Blue Devils**\n\
Confidence: 140\n\
Rationale: Better depth.";
    let source = CannedSource::answering(
        content,
        &["https://www.espn.com/duke", "https://goduke.com/stats"],
    );
    let service = ResearchService::new(source.clone());

    let request = MatchupRequest::new("Duke", "Mercer").with_context("Basketball", "NCAA");
    let response = service.research_matchup(&request).await.unwrap();

    let recommendation = response.recommendation.clone().unwrap();
    assert_eq!(recommendation.winner, "Duke");
    assert_eq!(recommendation.confidence, 100);
    assert_eq!(recommendation.rationale, "Better depth.");

    assert_eq!(response.citations.len(), 2);
    assert_eq!(response.citations[1].source.as_deref(), Some("goduke.com"));

    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(
        value["citations"][0],
        json!({
            "number": 1,
            "url": "https://www.espn.com/duke",
            "source": "espn.com",
            "title": "Reference 1"
        })
    );
    assert_eq!(value["recommendation"]["confidence"], 100);

    assert!(source.asked()[0].user.contains("between Duke and Mercer in the NCAA Basketball"));
}

#[tokio::test]
async fn test_matchup_research_without_signal_omits_recommendation() {
    let source = CannedSource::answering("Both teams have injuries to monitor.", &[]);
    let service = ResearchService::new(source);

    let response = service
        .research_matchup(&MatchupRequest::new("Chiefs", "Bills"))
        .await
        .unwrap();

    assert!(response.recommendation.is_none());
    assert!(response.citations.is_empty());
    let value = serde_json::to_value(&response).unwrap();
    assert!(value.get("recommendation").is_none());
}

#[tokio::test]
async fn test_invalid_request_never_reaches_source() {
    let source = CannedSource::answering("unused", &[]);
    let service = ResearchService::new(source.clone());

    let err = service
        .research_matchup(&MatchupRequest::new("", "Mercer"))
        .await
        .unwrap_err();
    assert_eq!(err, TourneyError::validation("Team 1 is required"));

    let err = service
        .research_tournament(&TournamentRequest::new("Basketball", ""))
        .await
        .unwrap_err();
    assert_eq!(err, TourneyError::validation("Tournament name is required"));

    assert!(source.asked().is_empty());
}

#[tokio::test]
async fn test_source_failures_are_errors_not_fallbacks() {
    let service = ResearchService::new(CannedSource::failing(TourneyError::config(
        "PERPLEXITY_API_KEY is not configured",
    )));
    let err = service
        .research_tournament(&TournamentRequest::new("Basketball", "NCAA"))
        .await
        .unwrap_err();
    assert!(matches!(err, TourneyError::Config(_)));

    let service = ResearchService::new(CannedSource::failing(upstream_error(500, "boom")));
    let err = service
        .research_matchup(&MatchupRequest::new("Duke", "Mercer"))
        .await
        .unwrap_err();
    assert!(err.is_upstream());
}
