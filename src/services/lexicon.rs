use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use log::{info, warn};
use tokio::sync::OnceCell;

use crate::constants::{MAX_LETTER_REPEATS, MAX_WORD_LENGTH, MIN_WORD_LENGTH};
use crate::utils::{can_form, can_form_counted, letter_counts};

/// Small fixed vocabulary installed when the dictionary source cannot
/// be read, so gameplay never blocks on a missing word list.
const FALLBACK_WORDS: [&str; 50] = [
    "CAT", "DOG", "BATH", "HOUSE", "COMPUTER", "THE", "AND", "THAT", "HAVE", "FOR", "NOT",
    "WITH", "YOU", "THIS", "BUT", "HIS", "FROM", "THEY", "SAY", "HER", "SHE", "WILL", "ONE",
    "ALL", "WOULD", "THERE", "THEIR", "WHAT", "OUT", "ABOUT", "WHO", "GET", "WHICH", "WHEN",
    "MAKE", "CAN", "LIKE", "TIME", "JUST", "HIM", "KNOW", "TAKE", "PEOPLE", "INTO", "YEAR",
    "YOUR", "GOOD", "SOME", "COULD", "THEM",
];

/// Where the dictionary comes from.
pub enum DictionarySource {
    /// Newline-delimited word list, filtered at ingest
    PlainList(PathBuf),
    /// Pre-bucketed JSON document mapping length -> words, trusted as-is
    Buckets(PathBuf),
}

impl DictionarySource {
    /// Infer the source shape from the file extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let is_json = path
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            DictionarySource::Buckets(path)
        } else {
            DictionarySource::PlainList(path)
        }
    }
}

struct LexiconData {
    words: HashSet<String>,
    by_length: HashMap<usize, HashSet<String>>,
}

impl LexiconData {
    fn from_words<I: IntoIterator<Item = String>>(words: I) -> Self {
        let words: HashSet<String> = words.into_iter().collect();
        let mut by_length: HashMap<usize, HashSet<String>> = HashMap::new();
        for word in &words {
            by_length
                .entry(word.chars().count())
                .or_default()
                .insert(word.clone());
        }
        Self { words, by_length }
    }
}

/// Authoritative word list for the game: membership checks,
/// letter-availability validation, and longest-word search over
/// per-length buckets. Loaded once and read-only thereafter.
pub struct Lexicon {
    source: DictionarySource,
    cell: OnceCell<LexiconData>,
}

impl Lexicon {
    pub fn new(source: DictionarySource) -> Self {
        Self {
            source,
            cell: OnceCell::new(),
        }
    }

    /// Lexicon preloaded from an in-memory word list.
    #[cfg(test)]
    pub(crate) fn with_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            source: DictionarySource::PlainList(PathBuf::new()),
            cell: OnceCell::new_with(Some(LexiconData::from_words(
                words.into_iter().map(Into::into),
            ))),
        }
    }

    /// Load the dictionary exactly once; concurrent callers wait on the
    /// same in-flight load. Never fails outward: on any load error the
    /// fallback list is installed and no retry is attempted.
    pub async fn initialize(&self) {
        self.data().await;
    }

    async fn data(&self) -> &LexiconData {
        self.cell
            .get_or_init(|| async {
                match load_dictionary(&self.source) {
                    Ok(data) => data,
                    Err(err) => {
                        warn!("Dictionary load failed ({}), using fallback word list", err);
                        LexiconData::from_words(FALLBACK_WORDS.iter().map(|w| w.to_string()))
                    }
                }
            })
            .await
    }

    pub async fn word_count(&self) -> usize {
        self.data().await.words.len()
    }

    /// Case-insensitive dictionary membership. Blank input is not valid.
    pub async fn is_valid_word(&self, word: &str) -> bool {
        let word = word.trim();
        if word.is_empty() {
            return false;
        }
        self.data().await.words.contains(&word.to_uppercase())
    }

    /// A word is accepted iff it is in the dictionary and can be spelled
    /// from the available letters. Blank word or letters fail without a
    /// dictionary lookup.
    pub async fn validate(&self, word: &str, available_letters: &str) -> bool {
        if word.trim().is_empty() || available_letters.trim().is_empty() {
            info!("Rejecting blank word or letters");
            return false;
        }
        if !self.is_valid_word(word).await {
            info!("Word {} not found in dictionary", word.to_uppercase());
            return false;
        }
        can_form(word, available_letters)
    }

    /// All dictionary words of the greatest length formable from the
    /// given letters. Buckets are scanned longest-first and the scan
    /// stops at the first length with any match, so the result never
    /// mixes lengths. Sorted for stable output.
    pub async fn longest_possible_words(&self, available_letters: &str) -> Vec<String> {
        let data = self.data().await;
        let counts = letter_counts(available_letters);

        for length in (MIN_WORD_LENGTH..=MAX_WORD_LENGTH).rev() {
            let bucket = match data.by_length.get(&length) {
                Some(bucket) => bucket,
                None => continue,
            };
            let mut matches: Vec<String> = bucket
                .iter()
                .filter(|word| can_form_counted(word, &mut counts.clone()))
                .cloned()
                .collect();
            if !matches.is_empty() {
                matches.sort();
                info!("Found {} formable words of length {}", matches.len(), length);
                return matches;
            }
        }
        Vec::new()
    }
}

fn load_dictionary(source: &DictionarySource) -> io::Result<LexiconData> {
    match source {
        DictionarySource::PlainList(path) => load_plain_list(path),
        DictionarySource::Buckets(path) => load_buckets(path),
    }
}

/// Load a newline-delimited word list, admitting only playable words.
fn load_plain_list(path: &Path) -> io::Result<LexiconData> {
    let file = File::open(path)?;
    let reader = io::BufReader::new(file);

    let mut words = HashSet::new();
    for line in reader.lines() {
        let line = line?;
        let raw = line.trim();
        if admissible(raw) {
            words.insert(raw.to_uppercase());
        }
    }

    info!("Loaded {} words from {}", words.len(), path.display());
    Ok(LexiconData::from_words(words))
}

/// Ingest filter for plain lists: 3-9 ASCII letters, lowercase first
/// character in the raw line (proper nouns excluded), and no letter
/// used more than twice.
fn admissible(raw: &str) -> bool {
    let length = raw.chars().count();
    if !(MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&length) {
        return false;
    }
    if !raw.chars().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }
    if !raw
        .chars()
        .next()
        .map_or(false, |c| c.is_ascii_lowercase())
    {
        return false;
    }
    !letter_counts(raw).values().any(|&n| n > MAX_LETTER_REPEATS)
}

/// Load a pre-bucketed JSON document. The buckets are pre-validated, so
/// no per-word filtering is applied.
fn load_buckets(path: &Path) -> io::Result<LexiconData> {
    let file = File::open(path)?;
    let buckets: HashMap<String, HashSet<String>> =
        serde_json::from_reader(io::BufReader::new(file))
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;

    let mut words = HashSet::new();
    let mut by_length = HashMap::new();
    for (length, bucket) in buckets {
        let length: usize = length
            .parse()
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        words.extend(bucket.iter().cloned());
        by_length.insert(length, bucket);
    }

    info!("Loaded {} words from {} buckets in {}", words.len(), by_length.len(), path.display());
    Ok(LexiconData { words, by_length })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("lettersd-test-{}-{}", std::process::id(), name))
    }

    #[tokio::test]
    async fn test_plain_list_filters_at_ingest() {
        let path = temp_path("plain.txt");
        std::fs::write(&path, "cat\ndog\naabba\nit\nchattered\nLondon\nqu1z\nhello\n").unwrap();

        let lexicon = Lexicon::new(DictionarySource::PlainList(path.clone()));
        lexicon.initialize().await;

        assert!(lexicon.is_valid_word("CAT").await);
        assert!(lexicon.is_valid_word("hello").await); // case-insensitive lookup
        assert!(!lexicon.is_valid_word("AABBA").await); // A three times
        assert!(!lexicon.is_valid_word("IT").await); // too short
        assert!(!lexicon.is_valid_word("LONDON").await); // proper noun
        assert!(!lexicon.is_valid_word("QU1Z").await); // non-alphabetic
        assert!(lexicon.is_valid_word("CHATTERED").await); // 9 letters, T twice is fine

        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn test_bucket_document_is_consumed_directly() {
        let path = temp_path("buckets.json");
        std::fs::write(&path, r#"{"3": ["CAT", "DOG"], "5": ["HOUSE"]}"#).unwrap();

        let lexicon = Lexicon::new(DictionarySource::Buckets(path.clone()));
        lexicon.initialize().await;

        assert_eq!(lexicon.word_count().await, 3);
        assert!(lexicon.is_valid_word("HOUSE").await);
        assert_eq!(
            lexicon.longest_possible_words("HOUSEX").await,
            vec!["HOUSE".to_string()]
        );

        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn test_missing_source_installs_fallback() {
        let lexicon = Lexicon::new(DictionarySource::PlainList(PathBuf::from(
            "/nonexistent/dictionary.txt",
        )));
        lexicon.initialize().await;

        assert_eq!(lexicon.word_count().await, FALLBACK_WORDS.len());
        assert!(lexicon.is_valid_word("CAT").await);
        assert!(lexicon.is_valid_word("COMPUTER").await);

        // Already initialized: a second call must not retry the load
        lexicon.initialize().await;
        assert_eq!(lexicon.word_count().await, FALLBACK_WORDS.len());
    }

    #[tokio::test]
    async fn test_concurrent_initialization_yields_one_load() {
        let lexicon = Arc::new(Lexicon::new(DictionarySource::PlainList(PathBuf::from(
            "/nonexistent/dictionary.txt",
        ))));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let lexicon = lexicon.clone();
            handles.push(tokio::spawn(async move {
                lexicon.initialize().await;
                lexicon.word_count().await
            }));
        }
        for handle in handles {
            assert_eq!(handle.await.unwrap(), FALLBACK_WORDS.len());
        }
    }

    #[tokio::test]
    async fn test_validate_requires_membership_and_letters() {
        let lexicon = Lexicon::with_words(["CAT", "CATS"]);

        assert!(lexicon.validate("cat", "ATCX").await);
        assert!(lexicon.validate("CATS", "STACK").await);
        assert!(!lexicon.validate("CAT", "XYZ").await); // letters unavailable
        assert!(!lexicon.validate("TACK", "TACKX").await); // not in dictionary
        assert!(!lexicon.validate("", "ATCX").await);
        assert!(!lexicon.validate("  ", "ATCX").await);
        assert!(!lexicon.validate("CAT", "").await);
    }

    #[tokio::test]
    async fn test_longest_words_never_mix_lengths() {
        let lexicon = Lexicon::with_words(["CAT", "CATS", "DOGS", "STACKED"]);

        // STACKED is unformable (no K or E); both four-letter words fit,
        // so the three-letter bucket is never examined.
        let longest = lexicon.longest_possible_words("CATSDOG").await;
        assert_eq!(longest, vec!["CATS".to_string(), "DOGS".to_string()]);
    }

    #[tokio::test]
    async fn test_longest_words_empty_when_nothing_forms() {
        let lexicon = Lexicon::with_words(["CAT"]);
        assert!(lexicon.longest_possible_words("XYZ").await.is_empty());
    }
}
