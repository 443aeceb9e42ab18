//! Prompt templates sent to the hosted model.
//!
//! Templates are deterministic: the same brief always yields the same prompt,
//! and every field is embedded verbatim.

use crate::contract::EmailBrief;

pub fn draft_email_prompt(brief: &EmailBrief) -> String {
    format!(
        "You are a professional email assistant. Draft a professional email with the following details:\n\
         \n\
         Purpose: {purpose}\n\
         Recipient: {recipient}\n\
         Key points: {key_points}\n\
         Tone: {tone}\n\
         \n\
         Format the email with an appropriate subject line, greeting, body, and closing.\n",
        purpose = brief.purpose,
        recipient = brief.recipient,
        key_points = brief.key_points,
        tone = brief.tone,
    )
}

pub fn evaluation_prompt(email_text: &str, brief: &EmailBrief) -> String {
    format!(
        "Please evaluate this email based on the following criteria. Rate each criterion from 1-5 (5 being excellent) and provide brief notes:\n\
         \n\
         EMAIL:\n\
         {email_text}\n\
         \n\
         ORIGINAL REQUIREMENTS:\n\
         Purpose: {purpose}\n\
         Recipient: {recipient}\n\
         Key points to include: {key_points}\n\
         Tone: {tone}\n\
         \n\
         CRITERIA TO EVALUATE:\n\
         1. Content Relevance: Does the generated email address the specified purpose?\n\
         2. Professionalism: Is the language and structure appropriate for professional communication?\n\
         3. Tone Consistency: Does the email maintain the requested tone throughout?\n\
         4. Completeness: Does it include all key points mentioned in the input?\n\
         5. Format Correctness: Does it have proper subject, greeting, body, and closing?\n\
         \n\
         For each criterion, provide a score (1-5) and brief notes. Then provide an overall score and summary evaluation.\n\
         Format your response as a JSON object with the following structure:\n\
         {{\n\
         \x20   \"content_relevance\": {{\"score\": X, \"notes\": \"...\"}},\n\
         \x20   \"professionalism\": {{\"score\": X, \"notes\": \"...\"}},\n\
         \x20   \"tone_consistency\": {{\"score\": X, \"notes\": \"...\"}},\n\
         \x20   \"completeness\": {{\"score\": X, \"notes\": \"...\"}},\n\
         \x20   \"format_correctness\": {{\"score\": X, \"notes\": \"...\"}},\n\
         \x20   \"overall\": {{\"score\": X, \"notes\": \"...\"}}\n\
         }}\n",
        purpose = brief.purpose,
        recipient = brief.recipient,
        key_points = brief.key_points,
        tone = brief.tone,
    )
}

pub fn bias_analysis_prompt(email_text: &str) -> String {
    format!(
        "Please analyze this email for potential bias and ethical concerns:\n\
         \n\
         EMAIL:\n\
         {email_text}\n\
         \n\
         Provide an analysis covering:\n\
         1. Language Bias: Is there any gender, cultural, age, or other bias in the language?\n\
         2. Inclusivity: Is the language inclusive and accessible to diverse audiences?\n\
         3. Ethical Concerns: Are there any ethical issues with the content or approach?\n\
         4. Recommendations: What changes would improve the email from a responsible AI perspective?\n\
         \n\
         Format your response as a JSON object with the following structure:\n\
         {{\n\
         \x20   \"language_bias\": \"...\",\n\
         \x20   \"inclusivity\": \"...\",\n\
         \x20   \"ethical_concerns\": \"...\",\n\
         \x20   \"recommendations\": \"...\"\n\
         }}\n"
    )
}
