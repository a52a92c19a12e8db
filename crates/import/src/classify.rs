use serde::{Deserialize, Serialize};

/// Money direction suggested by a description match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Receipt,
    Payment,
    Unknown,
}

/// Outcome of classifying one narration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub direction: Direction,
    pub account: Option<String>,
    pub category: Option<String>,
}

impl Classification {
    fn unknown() -> Self {
        Classification {
            direction: Direction::Unknown,
            account: None,
            category: None,
        }
    }
}

/// One ordered classification rule: a case-insensitive pattern, the ledger
/// account it suggests and its category label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierRule {
    pub direction: Direction,
    pub pattern: String,
    pub account: String,
    pub category: String,
}

/// Rule with its precompiled regex; rules whose pattern fails to compile
/// stay in the list but never match.
struct CompiledRule {
    rule: ClassifierRule,
    regex: Option<regex::Regex>,
}

/// Default table. Order is the contract: rules are tried top to bottom and
/// the first hit wins, receipts before payments. "salary" appears in both a
/// receipt and a payment rule, so salary narrations always classify as a
/// receipt; downstream tooling depends on that outcome, keep the order.
const DEFAULT_RULES: &[(Direction, &str, &str, &str)] = &[
    (
        Direction::Receipt,
        r"salary|income|revenue|sale|invoice|payment received|credit|deposit|refund",
        "4010",
        "Revenue",
    ),
    (Direction::Receipt, r"loan|advance received|borrowed", "2210", "Loan"),
    (
        Direction::Receipt,
        r"investment|dividend|interest received",
        "4020",
        "Investment",
    ),
    (Direction::Payment, r"rent|lease|accommodation", "5010", "Rent"),
    (
        Direction::Payment,
        r"salary|wages|payroll|employee",
        "5020",
        "Salaries",
    ),
    (Direction::Payment, r"electricity|power|utility", "5030", "Utilities"),
    (Direction::Payment, r"phone|telecom|mobile", "5031", "Utilities"),
    (Direction::Payment, r"internet|broadband", "5032", "Utilities"),
    (
        Direction::Payment,
        r"purchase|buy|vendor|supplier|bill",
        "5100",
        "Purchases",
    ),
    (Direction::Payment, r"tax|gst|tds|income tax", "5200", "Tax"),
    (
        Direction::Payment,
        r"loan repayment|emi|installment",
        "2220",
        "Loan",
    ),
    (Direction::Payment, r"insurance|premium", "5300", "Insurance"),
    (
        Direction::Payment,
        r"maintenance|repair|service",
        "5400",
        "Maintenance",
    ),
];

pub struct Classifier {
    rules: Vec<CompiledRule>,
}

impl Default for Classifier {
    fn default() -> Self {
        Classifier::new(
            DEFAULT_RULES
                .iter()
                .map(|(direction, pattern, account, category)| ClassifierRule {
                    direction: *direction,
                    pattern: (*pattern).to_string(),
                    account: (*account).to_string(),
                    category: (*category).to_string(),
                })
                .collect(),
        )
    }
}

impl Classifier {
    pub fn new(rules: Vec<ClassifierRule>) -> Self {
        let rules = rules
            .into_iter()
            .map(|rule| {
                let regex = regex::RegexBuilder::new(&rule.pattern)
                    .case_insensitive(true)
                    .build()
                    .ok();
                CompiledRule { rule, regex }
            })
            .collect();
        Classifier { rules }
    }

    /// Load a rule table from TOML (`[[rule]]` entries, kept in file order).
    pub fn from_toml(content: &str) -> Result<Self, String> {
        #[derive(Deserialize)]
        struct RuleFile {
            rule: Vec<ClassifierRule>,
        }
        let file: RuleFile =
            toml::from_str(content).map_err(|e| format!("Failed to parse rules TOML: {e}"))?;
        Ok(Classifier::new(file.rule))
    }

    /// First matching rule wins; no match is `Direction::Unknown` with no
    /// suggestion.
    pub fn categorize(&self, description: &str) -> Classification {
        let text = description.to_lowercase();
        self.rules
            .iter()
            .find(|cr| cr.regex.as_ref().is_some_and(|re| re.is_match(&text)))
            .map(|cr| Classification {
                direction: cr.rule.direction,
                account: Some(cr.rule.account.clone()),
                category: Some(cr.rule.category.clone()),
            })
            .unwrap_or_else(Classification::unknown)
    }
}
