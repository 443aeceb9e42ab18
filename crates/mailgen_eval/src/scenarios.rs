use mailgen_core::evaluation::Scenario;

/// Built-in evaluation cases, processed in this order.
pub fn default_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new(
            "Business Partnership",
            "Proposing a business partnership",
            "CEO of a technology company",
            "Our companies have complementary products; Suggest an initial meeting to discuss collaboration; Highlight potential market benefits of partnership",
            "professional but enthusiastic",
        ),
        Scenario::new(
            "Job Interview Follow-up",
            "Following up after a job interview",
            "HR Manager",
            "Express gratitude for the interview opportunity; Reiterate interest in the position; Mention specific discussion point from interview; Ask about next steps in the process",
            "professional and appreciative",
        ),
        Scenario::new(
            "Customer Complaint",
            "Addressing a customer complaint",
            "Upset customer",
            "Apologize for the inconvenience; Explain what happened; Offer a solution or compensation; Assure it won't happen again",
            "apologetic and helpful",
        ),
        Scenario::new(
            "Project Update",
            "Providing project status update",
            "Project stakeholders",
            "Current project status; Milestones achieved; Challenges encountered; Next steps and timeline",
            "professional and informative",
        ),
    ]
}
