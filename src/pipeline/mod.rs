pub mod stage2_summarize;
pub mod stage3_classify;
pub mod stage4_report;
