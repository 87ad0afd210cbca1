use keyword_extractor::{
    preprocess_bulk, top_noun_phrases, ExtractorConfig, KeywordExtractor, TFIDFVectorizer,
};

fn main() -> keyword_extractor::Result<()> {
    let articles = [
        "Ex-BBC anchor hired by Russian TV to cover the UK election",
        "Election 2019: Labour pledges free broadband for all homes",
        "Manchester United beat Chelsea in the FA Cup final",
        "Chelsea sign new striker ahead of the Cup replay",
        "Bank of England holds interest rates https://www.bbc.co.uk/news",
    ];

    let extractor = KeywordExtractor::new(ExtractorConfig::default().with_top_n(3))?;

    // frequency ranking per article
    let tokens = preprocess_bulk(&articles);
    for (i, top) in extractor.bulk_top_keywords(&tokens).iter().enumerate() {
        println!("doc{i} frequency: {top:?}");
    }

    // tf-idf ranking
    let model: TFIDFVectorizer = extractor.fit(&articles)?;
    println!("vocab: {} terms, nnz: {}", model.vocab_size(), model.nnz());
    for (i, keywords) in model.top_keywords_all_documents(3).iter().enumerate() {
        for kw in keywords {
            println!("doc{i}\t{kw}");
        }
    }
    println!("global: {:?}", extractor.tfidf_top_keywords_global(&articles)?);

    // capitalised word runs stand in for a real noun chunker
    let chunker = |text: &str| -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|w| w.chars().next().is_some_and(char::is_uppercase))
            .map(str::to_string)
            .collect()
    };
    println!("phrases: {:?}", top_noun_phrases(&chunker, &articles, 3));
    Ok(())
}
