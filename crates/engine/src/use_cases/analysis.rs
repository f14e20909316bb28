//! Message analysis use case.

use std::sync::Arc;

use scamguard_domain::{ScamAssessment, TriggerLexicon};

use crate::infrastructure::ports::{ClassifierError, ClassifierPort};

/// Scores a message by blending the ML classifier's probability with
/// the keyword rule layer.
pub struct AnalyzeMessage {
    classifier: Arc<dyn ClassifierPort>,
    lexicon: TriggerLexicon,
}

impl AnalyzeMessage {
    pub fn new(classifier: Arc<dyn ClassifierPort>, lexicon: TriggerLexicon) -> Self {
        Self {
            classifier,
            lexicon,
        }
    }

    pub async fn execute(&self, message: &str) -> Result<ScamAssessment, ClassifierError> {
        let probability = self.classifier.classify(message).await?;
        let assessment = ScamAssessment::evaluate(message, probability, &self.lexicon);

        tracing::debug!(
            label = %assessment.label,
            confidence = assessment.confidence,
            trigger_count = assessment.triggers.len(),
            "Message analyzed"
        );

        Ok(assessment)
    }
}
