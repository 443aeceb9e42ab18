use mailgen_core::evaluation::EvaluationRecord;

pub(crate) const SUMMARY_HEADER: [&str; 7] = [
    "Scenario",
    "Content Relevance",
    "Professionalism",
    "Tone Consistency",
    "Completeness",
    "Format Correctness",
    "Overall",
];

pub(crate) fn export_to_csv_impl(
    records: &[EvaluationRecord],
    file: std::fs::File,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut wtr = csv::Writer::from_writer(file);

    wtr.write_record(SUMMARY_HEADER)?;

    for record in records {
        let mut row = Vec::with_capacity(SUMMARY_HEADER.len());
        row.push(record.scenario.name.clone());
        row.extend(
            record
                .evaluation
                .score_row()
                .iter()
                .map(|score| score.to_string()),
        );
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}
