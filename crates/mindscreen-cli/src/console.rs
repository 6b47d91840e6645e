use std::io::Write;

use mindscreen_core::{Condition, DiagnosisResult, SeverityLevel, Symptom};
use mindscreen_engine::{EngineError, KnowledgeBase, Renderer};
use owo_colors::{OwoColorize, Style};

const RULE: &str = "============================================================";

/// Terminal renderer for assessments and knowledge-base listings.
pub struct ConsoleRenderer<W> {
    out: W,
    color: bool,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.color {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    fn level_style(level: SeverityLevel) -> Style {
        match level {
            SeverityLevel::Severe => Style::new().red().bold(),
            SeverityLevel::Moderate => Style::new().yellow().bold(),
            SeverityLevel::Mild => Style::new().cyan(),
            SeverityLevel::Minimal => Style::new().dimmed(),
        }
    }

    pub fn banner(&mut self) -> std::io::Result<()> {
        let title = self.paint("MENTAL HEALTH SCREENING", Style::new().bold());
        writeln!(self.out, "{RULE}")?;
        writeln!(self.out, "  {title}")?;
        writeln!(self.out, "  Interactive assessment with rule-based scoring")?;
        writeln!(self.out, "{RULE}")?;
        writeln!(
            self.out,
            "  This tool is a screening aid, not a diagnosis. Answer each\n  \
             question with 'yes' or 'no' (y/n)."
        )?;
        writeln!(self.out)?;
        Ok(())
    }

    pub fn note(&mut self, message: &str) -> std::io::Result<()> {
        writeln!(self.out, "{message}")
    }

    /// Print every condition with its checklist, weights and high-risk marks.
    pub fn list_conditions(&mut self, knowledge: &KnowledgeBase) -> std::io::Result<()> {
        let mut current_category = None;
        for entry in knowledge.entries() {
            let category = entry.condition.category();
            if current_category != Some(category) {
                let heading = self.paint(category.name(), Style::new().bold().underline());
                writeln!(self.out, "\n{heading}")?;
                current_category = Some(category);
            }
            writeln!(
                self.out,
                "  {} ({})",
                entry.condition.name(),
                entry.condition.id()
            )?;
            for &symptom in &entry.symptoms {
                let marker = if knowledge.is_high_risk(symptom) {
                    self.paint(" [high risk]", Style::new().red())
                } else {
                    String::new()
                };
                writeln!(
                    self.out,
                    "    - {:<32} weight {}{marker}",
                    symptom.id(),
                    knowledge.weight(symptom)
                )?;
            }
        }
        Ok(())
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn condition_started(
        &mut self,
        condition: Condition,
        pending_questions: usize,
    ) -> Result<(), EngineError> {
        if pending_questions > 0 {
            let heading = self.paint(condition.name(), Style::new().bold());
            writeln!(self.out, "\n-- {heading} --")?;
        }
        Ok(())
    }

    fn diagnosis(
        &mut self,
        result: &DiagnosisResult,
        recommendations: &[String],
    ) -> Result<(), EngineError> {
        let level = self.paint(result.level.as_str(), Self::level_style(result.level));
        writeln!(
            self.out,
            "\n  >> Indicators found for {} [{level}]",
            result.condition.name()
        )?;
        writeln!(
            self.out,
            "     symptoms: {}  severity: {}  confidence: {:.1}%",
            result.yes_count, result.severity, result.confidence
        )?;
        writeln!(self.out, "     Recommendations:")?;
        for recommendation in recommendations {
            writeln!(self.out, "       * {recommendation}")?;
        }
        Ok(())
    }

    fn crisis_alert(&mut self, risk_factors: &[Symptom]) -> Result<(), EngineError> {
        let alert_style = Style::new().red().bold();
        let title = self.paint("!!! CRISIS ALERT !!!", alert_style);
        writeln!(self.out, "\n{RULE}")?;
        writeln!(self.out, "  {title}")?;
        writeln!(self.out, "  You reported:")?;
        for symptom in risk_factors {
            writeln!(self.out, "    - {}", symptom.label())?;
        }
        writeln!(
            self.out,
            "  If you are in immediate danger or thinking about harming\n  \
             yourself, contact your local emergency number or a crisis line\n  \
             (for example 988 in the US) right now. You are not alone."
        )?;
        writeln!(self.out, "{RULE}")?;
        Ok(())
    }

    fn summary(&mut self, results: &[DiagnosisResult]) -> Result<(), EngineError> {
        let title = self.paint("ASSESSMENT SUMMARY", Style::new().bold());
        writeln!(self.out, "\n{RULE}")?;
        writeln!(self.out, "  {title}")?;
        writeln!(self.out, "{RULE}")?;

        if results.is_empty() {
            let message = self.paint("No conditions detected.", Style::new().green());
            writeln!(self.out, "  {message}")?;
            writeln!(
                self.out,
                "  If you are still struggling, talking to a professional can help."
            )?;
            return Ok(());
        }

        for result in results {
            let level = self.paint(result.level.as_str(), Self::level_style(result.level));
            writeln!(
                self.out,
                "  {:<34} {:>2} symptoms  severity {:>2}  {:>5.1}%  {level}",
                result.condition.name(),
                result.yes_count,
                result.severity,
                result.confidence
            )?;
        }
        writeln!(
            self.out,
            "\n  Please share these results with a qualified mental health professional."
        )?;
        Ok(())
    }
}
