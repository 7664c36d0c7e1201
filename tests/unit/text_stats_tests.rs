use mcp_workbench::models::text_stats::TextStatistics;

#[test]
fn empty_input_has_zero_counts_and_empty_words() {
    let stats = TextStatistics::analyze("");
    assert_eq!(stats.character_count, 0);
    assert_eq!(stats.word_count, 0);
    assert_eq!(stats.longest_word, "");
    assert_eq!(stats.shortest_word, "");
    assert!((stats.average_word_length - 0.0).abs() < f64::EPSILON);
}

#[test]
fn a_bb_ccc_counts() {
    let stats = TextStatistics::analyze("a bb ccc");
    assert_eq!(stats.word_count, 3);
    assert_eq!(stats.longest_word, "ccc");
    assert_eq!(stats.shortest_word, "a");
}

#[test]
fn character_count_includes_whitespace() {
    let stats = TextStatistics::analyze("a bb ccc");
    assert_eq!(stats.character_count, 8);
}

#[test]
fn line_count_splits_on_newline() {
    let stats = TextStatistics::analyze("one\ntwo\nthree");
    assert_eq!(stats.line_count, 3);
}

#[test]
fn sentence_count_groups_ending_runs() {
    let stats = TextStatistics::analyze("First. Second! Third?!");
    assert_eq!(stats.sentence_count, 3);
}

#[test]
fn no_sentence_endings_counts_as_one() {
    let stats = TextStatistics::analyze("no terminal punctuation here");
    assert_eq!(stats.sentence_count, 1);
}

#[test]
fn boundary_punctuation_is_stripped_from_words() {
    let stats = TextStatistics::analyze("(hello), \"world\"!");
    assert_eq!(stats.longest_word, "hello");
    assert_eq!(stats.shortest_word, "world");
    assert!((stats.average_word_length - 5.0).abs() < f64::EPSILON);
}

#[test]
fn average_rounds_to_two_decimals() {
    // Lengths 1 and 2 give an average of 1.5.
    let stats = TextStatistics::analyze("x yz");
    assert!((stats.average_word_length - 1.5).abs() < f64::EPSILON);

    // Lengths 1, 1, 2 give 1.3333... which rounds to 1.33.
    let stats = TextStatistics::analyze("a b cd");
    assert!((stats.average_word_length - 1.33).abs() < f64::EPSILON);
}

#[test]
fn whitespace_only_input_has_no_words() {
    let stats = TextStatistics::analyze("   \n  \t ");
    assert_eq!(stats.word_count, 0);
    assert_eq!(stats.longest_word, "");
    assert_eq!(stats.shortest_word, "");
}

#[test]
fn serializes_all_fields() {
    let value = serde_json::to_value(TextStatistics::analyze("a bb ccc.")).expect("serializes");
    assert_eq!(value["word_count"], 3);
    assert_eq!(value["sentence_count"], 1);
    assert_eq!(value["longest_word"], "ccc");
}
