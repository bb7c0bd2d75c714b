//! End-to-end tests for the site generation pipeline
//!
//! Tests the observable contract of a run:
//! - The written page equals the SEO stage output byte-for-byte
//! - Each stage receives the previous stage's output verbatim
//! - A backend failure in any stage leaves nothing on disk
//! - Re-running overwrites the page and leaves unrelated files alone


use proptest::prelude::*;
use sitechain::agent::Agent;
use sitechain::error::ErrorKind;
use sitechain::pipeline::{PipelineStages, SiteOrchestrator, StageKind};
use sitechain::testing::mocks::MockLlmProvider;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use test_helpers::{orchestrator_for, scripted_orchestrator, STAGE_OUTPUTS};

#[tokio::test]
async fn test_successful_run_writes_seo_output_verbatim() {
    let temp = TempDir::new().unwrap();
    let (orchestrator, provider) = scripted_orchestrator(&STAGE_OUTPUTS);

    let path = orchestrator
        .generate("a neighbourhood tea house", temp.path())
        .await
        .unwrap();

    assert_eq!(path, temp.path().join("index.html"));
    assert_eq!(std::fs::read(&path).unwrap(), STAGE_OUTPUTS[3].as_bytes());
    assert_eq!(provider.call_count().await, 4);

    let entries: Vec<_> = std::fs::read_dir(temp.path()).unwrap().collect();
    assert_eq!(entries.len(), 1, "only index.html should be produced");
}

#[tokio::test]
async fn test_each_stage_receives_previous_output() {
    let temp = TempDir::new().unwrap();
    let (orchestrator, provider) = scripted_orchestrator(&["r1", "r2", "r3", "r4"]);

    orchestrator.generate("topic", temp.path()).await.unwrap();

    let prompts = provider.recorded_prompts().await;
    assert_eq!(
        prompts,
        vec![
            "Plan a website around the topic: topic. Include sections and layout.".to_string(),
            "Generate page content based on this plan: r1".to_string(),
            "Generate HTML and CSS for the following content. Use accessible markup and \
             mobile-first responsive design: r2"
                .to_string(),
            "Improve the SEO metadata and structure for this HTML: r3".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_whitespace_and_braces_survive_handoff() {
    let temp = TempDir::new().unwrap();
    let tricky = "  {input} \n\t<style>body { margin: 0 }</style>\n\n";
    let (orchestrator, provider) = scripted_orchestrator(&[tricky, "c", "d", "e"]);

    orchestrator.generate("topic", temp.path()).await.unwrap();

    let prompts = provider.recorded_prompts().await;
    assert!(prompts[1].ends_with(tricky));
}

#[tokio::test]
async fn test_failure_in_any_stage_writes_nothing() {
    for failing_call in 0..4 {
        let temp = TempDir::new().unwrap();
        let output_dir = temp.path().join("site");
        let provider = Arc::new(MockLlmProvider::failing_on_call(
            STAGE_OUTPUTS.iter().map(|s| s.to_string()).collect(),
            failing_call,
        ));
        let orchestrator = orchestrator_for(provider.clone());

        let error = orchestrator
            .generate("topic", &output_dir)
            .await
            .unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Generation);
        assert!(error.to_string().contains("Mock LLM failure"));
        assert_eq!(provider.call_count().await, failing_call + 1);
        assert!(
            !output_dir.exists(),
            "stage {failing_call} failure must not touch the output directory"
        );
    }
}

#[tokio::test]
async fn test_second_run_overwrites_previous_page() {
    let temp = TempDir::new().unwrap();

    let (first, _) = scripted_orchestrator(&["a", "b", "c", "<p>first</p>"]);
    first.generate("topic", temp.path()).await.unwrap();

    let (second, _) = scripted_orchestrator(&["a", "b", "c", "<p>second</p>"]);
    let path = second.generate("topic", temp.path()).await.unwrap();

    assert_eq!(std::fs::read_to_string(path).unwrap(), "<p>second</p>");
}

#[tokio::test]
async fn test_missing_parents_created_and_unrelated_files_kept() {
    let temp = TempDir::new().unwrap();

    let nested = temp.path().join("deep").join("er").join("site");
    let (orchestrator, _) = scripted_orchestrator(&STAGE_OUTPUTS);
    orchestrator.generate("topic", &nested).await.unwrap();
    assert!(nested.join("index.html").is_file());

    let existing = temp.path().join("existing");
    std::fs::create_dir(&existing).unwrap();
    std::fs::write(existing.join("style.css"), "body {}").unwrap();

    let (orchestrator, _) = scripted_orchestrator(&STAGE_OUTPUTS);
    orchestrator.generate("topic", &existing).await.unwrap();

    assert_eq!(
        std::fs::read_to_string(existing.join("style.css")).unwrap(),
        "body {}"
    );
    assert_eq!(
        std::fs::read_to_string(existing.join("index.html")).unwrap(),
        STAGE_OUTPUTS[3]
    );
}

#[tokio::test]
async fn test_override_agents_see_formatted_prompts() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let recording_agent = |kind: StageKind, reply: &'static str| {
        let sink = seen.clone();
        Agent::with_override(kind.name(), kind.default_template(), move |prompt| {
            sink.lock().unwrap().push(prompt.to_string());
            reply.to_string()
        })
        .unwrap()
    };

    let stages = PipelineStages::from_agents(
        recording_agent(StageKind::Planner, "plan"),
        recording_agent(StageKind::Content, "copy"),
        recording_agent(StageKind::Design, "<html>"),
        recording_agent(StageKind::Seo, "<html seo>"),
    );

    let html = SiteOrchestrator::new(stages).render("kites").await.unwrap();

    assert_eq!(html, "<html seo>");
    let seen = seen.lock().unwrap();
    assert_eq!(
        seen[0],
        "Plan a website around the topic: kites. Include sections and layout."
    );
    assert_ne!(seen[1], "plan", "override must not receive the raw input");
    assert_eq!(seen[1], "Generate page content based on this plan: plan");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_stage_outputs_are_handed_over_verbatim(
        r1 in ".{0,40}",
        r2 in ".{0,40}",
        r3 in ".{0,40}",
        r4 in ".{0,40}",
    ) {
        let temp = TempDir::new().unwrap();
        let runtime = tokio::runtime::Runtime::new().unwrap();

        let (prompts, written) = runtime.block_on(async {
            let (orchestrator, provider) =
                scripted_orchestrator(&[r1.as_str(), r2.as_str(), r3.as_str(), r4.as_str()]);
            let path = orchestrator.generate("topic", temp.path()).await.unwrap();
            (provider.recorded_prompts().await, std::fs::read_to_string(path).unwrap())
        });

        prop_assert!(prompts[1].contains(&r1));
        prop_assert!(prompts[2].contains(&r2));
        prop_assert!(prompts[3].contains(&r3));
        prop_assert_eq!(written, r4);
    }
}
