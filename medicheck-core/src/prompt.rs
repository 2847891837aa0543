/// Build the single user message sent to the model for a symptom description.
pub fn build_prompt(symptoms: &str) -> String {
    format!(
        r#"You are a medical AI assistant. Based on the following symptoms, provide a structured analysis. Be helpful but always emphasize that this is not a substitute for professional medical advice.

Symptoms: {symptoms}

Please provide your response in this exact JSON format:
{{
  "disease": "Most likely condition name",
  "confidence": "High/Medium/Low confidence level",
  "description": "Brief description of the condition and how it relates to the symptoms",
  "precautions": ["List of 3-5 precautionary measures"],
  "medications": ["List of 3-5 common medications or treatments (mention consulting doctor)"],
  "workouts": ["List of 3-5 appropriate exercises or physical activities"],
  "diets": ["List of 3-5 dietary recommendations"]
}}

Important guidelines:
- Always mention consulting a healthcare professional
- For medications, include "consult doctor before taking"
- Be specific but not overly technical
- Consider the symptoms seriously but don't cause panic
- Provide practical, actionable advice"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_symptoms_and_schema() {
        let prompt = build_prompt("sore throat for three days");
        assert!(prompt.contains("Symptoms: sore throat for three days"));
        for field in [
            "\"disease\"",
            "\"confidence\"",
            "\"description\"",
            "\"precautions\"",
            "\"medications\"",
            "\"workouts\"",
            "\"diets\"",
        ] {
            assert!(prompt.contains(field), "prompt is missing {field}");
        }
        assert!(prompt.contains("consult doctor before taking"));
    }

    #[test]
    fn symptom_text_is_not_interpreted_as_format_arguments() {
        let prompt = build_prompt("pain {0} and {symptoms}");
        assert!(prompt.contains("Symptoms: pain {0} and {symptoms}"));
    }
}
