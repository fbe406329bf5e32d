use acquire_core::api::{EvaluationBackend, LocalBackend};
use acquire_core::model::evaluation::CompanyInfo;
use acquire_core::registry::documents::DocumentRegistry;
use acquire_core::registry::evaluations::EvaluationRegistry;
use acquire_core::registry::persistence::MemoryStore;
use acquire_core::seed::{seeded_documents, seeded_evaluations};
use acquire_core::view::pipeline::{ListQuery, SortColumn, project};
use acquire_core::workflow::submission::{
    DocumentChoice, SubmissionInput, SubmissionOutcome, SubmissionWorkflow,
};
use anyhow::Result;
use std::sync::Arc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Seeded registries, no external service
    let documents = DocumentRegistry::new(seeded_documents(), Arc::new(MemoryStore::default()));
    let backend: Arc<dyn EvaluationBackend> = Arc::new(LocalBackend::default());
    let mut evaluations = EvaluationRegistry::new_local(seeded_evaluations());

    // Submit a new company against a stored policy document
    let workflow = SubmissionWorkflow::new(backend);
    let stored = documents.list().first().cloned().unwrap();
    let outcome = workflow
        .submit(
            SubmissionInput {
                company_name: "Acme Corporation".to_string(),
                company_info: CompanyInfo {
                    website: "https://acme.example".to_string(),
                    industry: "Technology".to_string(),
                    additional_info: String::new(),
                },
                document: Some(DocumentChoice::Stored {
                    document_id: stored.id,
                }),
            },
            |phase| println!("{}", phase.message()),
        )
        .await;
    if let SubmissionOutcome::Succeeded { record, .. } = outcome {
        evaluations.add(record);
    }

    // Derive the dashboard rows, newest first
    let mut query = ListQuery::default();
    query.toggle_sort(SortColumn::LastUpdated);
    for row in project(&evaluations.list(), &query) {
        println!(
            "{} [{}] rubric={} ours={} final={} updated={}",
            row.company,
            row.industry,
            row.rubric_score.as_str(),
            row.our_score.as_str(),
            row.final_score.as_str(),
            row.last_updated,
        );
    }

    Ok(())
}
