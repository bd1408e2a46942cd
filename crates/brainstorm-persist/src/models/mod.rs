mod history_record;

pub use history_record::HistoryRecord;
