use keyword_extractor::{
    clean, preprocess, preprocess_bulk, remove_stopwords, tfidf_keywords_per_document,
    tfidf_top_keywords_global, tfidf_top_keywords_per_document, top_keywords, top_noun_phrases,
    top_phrases, Corpus, Error, ExtractorConfig, KeywordExtractor, TFIDFVectorizer,
    TermFrequency, Vocabulary,
};
use keyword_extractor::vectorizer::analyzer::analyze_into_freq;

const HEADLINES: [&str; 6] = [
    "Ex-BBC anchor hired by Russian TV to cover UK election https://bbc.co.uk/news/1",
    "Election 2019: Labour pledges free broadband for all homes",
    "Manchester United beat Chelsea 2-1 in the FA Cup final",
    "Chelsea sign new striker ahead of Cup replay",
    "Bank of England holds interest rates at 0.75%",
    "Interest rates: what the Bank of England decision means for you",
];

#[test]
fn cleaned_text_is_plain_lowercase_letters() {
    for headline in HEADLINES {
        let cleaned = clean(headline);
        assert!(!cleaned.chars().any(|c| c.is_ascii_digit()));
        assert!(!cleaned.chars().any(char::is_uppercase));
        assert!(!cleaned.contains("http"));
        assert!(!cleaned.contains("  "));
        assert_eq!(cleaned, cleaned.trim());
    }
    assert_eq!(clean(""), "");
    for tricky in ["HTTP is a protocol", "ht1tp and ht.tp://x", "news via http", "h.t.t.p.s"] {
        let cleaned = clean(tricky);
        assert!(!cleaned.contains("http"), "{tricky:?} -> {cleaned:?}");
    }
}

#[test]
fn preprocess_empty_inputs() {
    assert!(preprocess("").is_empty());
    let none: [&str; 0] = [];
    assert!(preprocess_bulk(&none).is_empty());
    assert_eq!(preprocess_bulk(&["", "the"]), vec![Vec::<String>::new(), vec![]]);
}

#[test]
fn preprocess_drops_stopwords_and_keeps_order() {
    let tokens = preprocess("The Bank of England holds interest rates");
    assert_eq!(tokens, vec!["bank", "england", "holds", "interest", "rates"]);
}

#[test]
fn preprocess_bulk_matches_sequential() {
    let bulk = preprocess_bulk(&HEADLINES);
    let sequential: Vec<Vec<String>> = HEADLINES.iter().map(|h| preprocess(h)).collect();
    assert_eq!(bulk, sequential);
}

#[test]
fn remove_stopwords_is_idempotent() {
    let tokens = ["we", "will", "cover", "the", "election", "and", "results"];
    let once = remove_stopwords(&tokens);
    let twice = remove_stopwords(&once);
    assert_eq!(once, twice);
    assert_eq!(once, vec!["cover", "election", "results"]);
}

#[test]
fn frequency_top_n_excludes_only_lower_counts() {
    let tokens = ["a", "a", "b", "b", "c", "c", "d"];
    let top = top_keywords(&tokens, 2);
    assert_eq!(top.len(), 2);
    let freq = TermFrequency::from(&tokens[..]);
    let min_kept = top.iter().map(|t| freq.term_count(t)).min().unwrap();
    for term in freq.term_set_ref_str() {
        if !top.iter().any(|t| t == term) {
            assert!(freq.term_count(term) <= min_kept);
        }
    }
    assert_eq!(top, vec!["a", "b"]);
    let none: [&str; 0] = [];
    assert!(top_keywords(&none, 5).is_empty());
}

#[test]
fn global_tfidf_ranks_python_above_rust() {
    let docs = ["python python python", "javascript javascript", "rust"];
    let top = tfidf_top_keywords_global(&docs, 2).unwrap();
    assert_eq!(top.len(), 2);
    let pos = |t: &str| top.iter().position(|x| x == t);
    let python = pos("python").expect("python in top 2");
    assert!(pos("rust").map_or(true, |rust| python < rust));
}

#[test]
fn per_document_tfidf_over_two_docs() {
    let docs = [
        "Python is great for data science",
        "JavaScript is used for web development",
    ];
    let per_doc = tfidf_top_keywords_per_document(&docs, 2).unwrap();
    assert_eq!(per_doc.len(), 2);
    assert!(per_doc.iter().all(|kws| kws.len() <= 2));

    let scored = tfidf_keywords_per_document(&docs, 2).unwrap();
    for keywords in &scored {
        for kw in keywords {
            assert!(kw.score > 0.0);
        }
    }
}

#[test]
fn tfidf_error_cases() {
    let none: [&str; 0] = [];
    assert!(matches!(tfidf_top_keywords_global(&none, 3), Err(Error::InvalidInput(_))));
    assert!(matches!(
        tfidf_top_keywords_per_document(&["", "of the"], 3),
        Err(Error::InvalidInput(_))
    ));
    let model: TFIDFVectorizer = TFIDFVectorizer::fit(&HEADLINES, 0.85).unwrap();
    assert!(model.top_keywords_per_document(HEADLINES.len(), 1).is_err());
    assert!(model.top_keywords_global(0).is_empty());
}

#[test]
fn phrases_from_empty_lists() {
    assert!(top_phrases(&[vec![], vec![]], 3).is_empty());
}

#[test]
fn phrases_rank_across_documents() {
    let lists = vec![
        vec!["The Bank of England".to_string(), "interest rates".to_string()],
        vec!["interest rates".to_string(), "the bank of england".to_string()],
        vec!["Interest Rates".to_string()],
    ];
    assert_eq!(top_phrases(&lists, 2), vec!["interest rates", "the bank of england"]);
}

#[test]
fn noun_phrases_through_a_closure_chunker() {
    // comma-separated "chunks"
    let chunker = |text: &str| -> Vec<String> {
        text.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    };
    let texts = ["Labour, free broadband", "Free Broadband, rural homes"];
    assert_eq!(top_noun_phrases(&chunker, &texts, 1), vec!["free broadband"]);
}

#[test]
fn vocabulary_is_deterministic_across_builds() {
    let build = || {
        let corpus = Corpus::new();
        for headline in HEADLINES {
            corpus.add_freq(&analyze_into_freq(headline));
        }
        Vocabulary::build(&corpus, 0.85).unwrap()
    };
    let first = build();
    let second = build();
    assert_eq!(first, second);
    let terms: Vec<&str> = first.iter().collect();
    let mut sorted = terms.clone();
    sorted.sort_unstable();
    assert_eq!(terms, sorted);
}

#[test]
fn model_statistics() {
    let model: TFIDFVectorizer = TFIDFVectorizer::fit(&HEADLINES, 0.85).unwrap();
    assert_eq!(model.doc_num(), HEADLINES.len());
    assert_eq!(model.document_frequency("chelsea"), 2);
    assert_eq!(model.document_frequency("missing"), 0);
    let idf = model.idf("chelsea").unwrap();
    assert!((idf - ((7.0f64 / 3.0).ln() + 1.0)).abs() < 1e-12);
    assert!(model.nnz() > 0);
    assert_eq!(model.matrix.shape(), (HEADLINES.len(), model.vocab_size()));
}

#[test]
fn extractor_from_json_config() {
    let config: ExtractorConfig = serde_json::from_str(r#"{"top_n": 3}"#).unwrap();
    assert_eq!(config.max_df, 0.85);
    let extractor = KeywordExtractor::new(config).unwrap();
    let global = extractor.tfidf_top_keywords_global(&HEADLINES).unwrap();
    assert_eq!(global.len(), 3);

    let bad: ExtractorConfig = serde_json::from_str(r#"{"max_df": 0.0}"#).unwrap();
    assert!(matches!(KeywordExtractor::new(bad), Err(Error::Configuration(_))));
}
