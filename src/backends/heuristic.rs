/// Offline keyword-scoring stand-in for the hosted endpoint.
///
/// Produces a completion-shaped "YES"/"NO" string so the same label parsing
/// applies. Useful for dry runs without a credential and for exercising the
/// job end to end without network access.
#[derive(Debug, Default, Clone)]
pub struct HeuristicBackend {}

// Topics that tend to matter for civil services exam preparation.
const POLICY_KEYWORDS: &[&str] = &[
    "government",
    "policy",
    "politics",
    "election",
    "minister",
    "law",
    "legislation",
    "parliament",
    "vote",
    "voter",
    "migration",
    "urbanisation",
    "international",
    "relations",
    "foreign",
    "diplomacy",
    "trade",
    "economics",
    "finance",
    "budget",
    "court",
    "legal",
    "rights",
    "social",
    "welfare",
];

const NON_POLICY_KEYWORDS: &[&str] = &[
    "science",
    "technology",
    "health",
    "medicine",
    "biology",
    "neuroscience",
    "vaccine",
    "bacteria",
    "tuberculosis",
    "sports",
    "music",
    "entertainment",
    "art",
    "culture",
    "artificial intelligence",
    "cricket",
    "football",
    "movie",
    "film",
    "actor",
    "research",
];

impl HeuristicBackend {
    pub fn new() -> Self {
        Default::default()
    }

    pub(crate) fn completion(&self, prompt: &str) -> String {
        let lowered = prompt.to_lowercase();
        let policy_score = POLICY_KEYWORDS
            .iter()
            .filter(|keyword| lowered.contains(*keyword))
            .count();
        let non_policy_score = NON_POLICY_KEYWORDS
            .iter()
            .filter(|keyword| lowered.contains(*keyword))
            .count();

        if policy_score > non_policy_score {
            "YES".to_string()
        } else if non_policy_score > policy_score {
            "NO".to_string()
        } else {
            // Tied or no keyword hits: pick one to simulate model uncertainty.
            if rand::random::<bool>() {
                "YES".to_string()
            } else {
                "NO".to_string()
            }
        }
    }
}
