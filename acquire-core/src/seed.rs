//! Seeded demonstration data for the dashboard: fifteen evaluated
//! companies, a pool of citation templates, and a deterministic
//! generator used by the offline backend for new submissions. Seeded
//! ids live in the reserved `seed-` namespace.

// General imports
use chrono::{Duration, SecondsFormat, Utc};
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

// mod imports
use crate::model::document::StoredDocument;
use crate::model::evaluation::{
    CompanyInfo, EvaluationRecord, EvaluationResult, EvaluationStatus, RubricResults,
};
use crate::model::rubric::{
    ExtendedContext, PolicyGrounding, PolicyPage, RubricItem, Source, SourceHighlight,
};
use crate::scoring::aggregate::{round1, score_rubric};

const CATEGORIES: &[&str] = &[
    "Data Privacy & Protection",
    "Anti-Money Laundering (AML)",
    "Know Your Customer (KYC)",
    "Cybersecurity Controls",
    "Financial Reporting Transparency",
    "Regulatory Compliance History",
    "Environmental Compliance",
    "Corporate Governance",
    "Sanctions Screening",
    "Beneficial Ownership Disclosure",
    "Supply Chain Due Diligence",
    "Fraud Prevention Controls",
    "Consumer Protection Standards",
    "Workplace Safety Compliance",
    "Tax Compliance",
];

const RATINGS_HIGH: &[&str] = &["Compliant", "Fully Compliant", "Strong"];
const RATINGS_MED: &[&str] = &["Partially Compliant", "Adequate", "Needs Improvement"];
const RATINGS_LOW: &[&str] = &["Non-Compliant", "Insufficient", "Critical Gap"];

struct SourceTemplate {
    name: &'static str,
    url: &'static str,
    publisher: &'static str,
    excerpt: &'static str,
}

const SOURCE_TEMPLATES: &[SourceTemplate] = &[
    SourceTemplate {
        name: "SEC Filing 10-K Annual Report",
        url: "https://www.sec.gov/cgi-bin/browse-edgar",
        publisher: "U.S. Securities and Exchange Commission",
        excerpt: "The company maintains internal controls over financial reporting in accordance with Section 404 of the Sarbanes-Oxley Act. Management has assessed the effectiveness of these controls and found them to be operating as designed.",
    },
    SourceTemplate {
        name: "GDPR Compliance Assessment Report",
        url: "https://gdpr-info.eu/art-30-gdpr",
        publisher: "European Data Protection Board",
        excerpt: "Data processing activities are documented as required under Article 30. The controller maintains records of processing activities including purposes, categories of data subjects, and anticipated time limits for erasure.",
    },
    SourceTemplate {
        name: "Bloomberg Industry Analysis",
        url: "https://www.bloomberg.com/research",
        publisher: "Bloomberg LP",
        excerpt: "The company has demonstrated consistent revenue growth of 12% year-over-year with a strong balance sheet position. Debt-to-equity ratio remains within industry benchmarks at 0.45x.",
    },
    SourceTemplate {
        name: "Dun & Bradstreet Business Profile",
        url: "https://www.dnb.com/business-directory",
        publisher: "Dun & Bradstreet",
        excerpt: "Business credit score of 82 out of 100 indicates low financial risk. Payment history shows consistent on-time payments with no delinquencies reported in the past 24 months.",
    },
    SourceTemplate {
        name: "Reuters Market Intelligence Report",
        url: "https://www.reuters.com/markets",
        publisher: "Reuters",
        excerpt: "Market analysts note the firm has maintained a strong competitive position in its core markets. Regulatory filings indicate no pending enforcement actions or material litigation.",
    },
    SourceTemplate {
        name: "FinCEN BSA Filing Review",
        url: "https://www.fincen.gov/resources/filing-information",
        publisher: "Financial Crimes Enforcement Network",
        excerpt: "Bank Secrecy Act compliance review indicates proper filing of Currency Transaction Reports (CTRs) and Suspicious Activity Reports (SARs). No deficiencies noted in the most recent examination cycle.",
    },
    SourceTemplate {
        name: "OFAC Sanctions Screening Results",
        url: "https://sanctionssearch.ofac.treas.gov",
        publisher: "U.S. Department of the Treasury",
        excerpt: "Screening against the Specially Designated Nationals (SDN) list and all OFAC sanctions programs returned no matches. All beneficial owners and key management personnel cleared.",
    },
    SourceTemplate {
        name: "ISO 27001 Certification Report",
        url: "https://www.iso.org/isoiec-27001-information-security",
        publisher: "International Organization for Standardization",
        excerpt: "The organization has achieved ISO 27001:2022 certification for its information security management system. The scope covers all critical business operations and data processing facilities.",
    },
    SourceTemplate {
        name: "EPA Environmental Compliance Record",
        url: "https://echo.epa.gov/facilities",
        publisher: "U.S. Environmental Protection Agency",
        excerpt: "Facility inspection records show compliance with all applicable environmental regulations. No significant violations reported in the past five years. All required permits are current.",
    },
    SourceTemplate {
        name: "OSHA Workplace Safety Audit",
        url: "https://www.osha.gov/establishments",
        publisher: "Occupational Safety and Health Administration",
        excerpt: "Most recent workplace safety inspection found no serious violations. The company maintains a Total Recordable Incident Rate (TRIR) of 1.2, well below the industry average of 3.1.",
    },
    SourceTemplate {
        name: "Moody's Credit Assessment",
        url: "https://www.moodys.com/research",
        publisher: "Moody's Investors Service",
        excerpt: "Current credit rating of Baa1 with a stable outlook. Strong cash flow generation and prudent capital allocation support the rating. Liquidity position remains adequate with $450M in available credit facilities.",
    },
    SourceTemplate {
        name: "PwC Annual Audit Report",
        url: "https://www.pwc.com/audit-assurance",
        publisher: "PricewaterhouseCoopers",
        excerpt: "In our opinion, the financial statements present fairly, in all material respects, the financial position of the company. No material weaknesses in internal controls were identified.",
    },
    SourceTemplate {
        name: "World Bank Governance Indicators",
        url: "https://info.worldbank.org/governance/wgi",
        publisher: "The World Bank Group",
        excerpt: "The jurisdiction of incorporation scores in the 85th percentile for rule of law and 78th percentile for control of corruption, indicating a favorable regulatory environment.",
    },
    SourceTemplate {
        name: "S&P Global ESG Assessment",
        url: "https://www.spglobal.com/esg",
        publisher: "S&P Global",
        excerpt: "ESG score of 72 out of 100 places the company in the top quartile of its industry peers. Notable strengths in governance practices and environmental management programs.",
    },
    SourceTemplate {
        name: "Transparency International CPI Report",
        url: "https://www.transparency.org/en/cpi",
        publisher: "Transparency International",
        excerpt: "Operations are primarily located in jurisdictions with a Corruption Perceptions Index score above 65, indicating relatively low levels of perceived public sector corruption.",
    },
];

struct PolicyQuote {
    doc: &'static str,
    quote: &'static str,
    context: &'static str,
}

const POLICY_QUOTES: &[PolicyQuote] = &[
    PolicyQuote {
        doc: "Customer Acquisition Policy v4.2",
        quote: "All prospective customers must undergo enhanced due diligence screening prior to onboarding, including verification of beneficial ownership structure and source of funds.",
        context: "Section 3.1 — Customer Due Diligence Requirements",
    },
    PolicyQuote {
        doc: "AML/KYC Compliance Manual",
        quote: "Transaction monitoring systems shall flag any activity that deviates from established customer profiles, including unusual transaction volumes, frequency, or geographic patterns.",
        context: "Section 5.4 — Ongoing Monitoring",
    },
    PolicyQuote {
        doc: "Data Protection & Privacy Policy",
        quote: "Personal data collected during the onboarding process must be processed in accordance with applicable data protection regulations and retained only for the minimum period required by law.",
        context: "Section 2.3 — Data Minimization",
    },
    PolicyQuote {
        doc: "Third-Party Risk Management Framework",
        quote: "Critical third-party relationships must be subject to annual risk assessments, including financial stability review, cybersecurity posture evaluation, and compliance verification.",
        context: "Section 4.1 — Vendor Assessment",
    },
    PolicyQuote {
        doc: "Enterprise Risk Management Policy",
        quote: "Risk appetite statements shall be reviewed quarterly by the Board Risk Committee and updated to reflect changes in the operating environment and strategic objectives.",
        context: "Section 1.2 — Risk Governance",
    },
    PolicyQuote {
        doc: "Information Security Policy",
        quote: "All systems processing sensitive data must implement multi-factor authentication, encryption at rest and in transit, and maintain audit logs for a minimum of twelve months.",
        context: "Section 6.1 — Technical Controls",
    },
    PolicyQuote {
        doc: "Corporate Governance Charter",
        quote: "The board shall maintain an independent audit committee comprising at least three non-executive directors with relevant financial expertise.",
        context: "Section 2.5 — Board Composition",
    },
    PolicyQuote {
        doc: "Environmental & Social Responsibility Policy",
        quote: "Supply chain partners must demonstrate compliance with internationally recognized labor standards and environmental management practices as a condition of continued engagement.",
        context: "Section 3.3 — Supply Chain Standards",
    },
];

/// Counter distinguishing generated evaluations submitted within the
/// same process.
static GENERATED: AtomicU64 = AtomicU64::new(0);

fn hash_seed(input: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    input.hash(&mut hasher);
    hasher.finish()
}

/// Deterministic value in `[0, 1)` derived from a seed and a salt.
fn unit(seed: u64, salt: u64) -> f64 {
    let mixed = seed
        .wrapping_mul(0x9e37_79b9_7f4a_7c15)
        .wrapping_add(salt.wrapping_mul(0xbf58_476d_1ce4_e5b9));
    (mixed >> 11) as f64 / (1u64 << 53) as f64
}

fn rating_for_score(score: f64, pick: usize) -> String {
    let pool = if score >= 7.5 {
        RATINGS_HIGH
    } else if score >= 5.0 {
        RATINGS_MED
    } else {
        RATINGS_LOW
    };
    pool[pick % pool.len()].to_string()
}

fn days_ago(n: i64) -> String {
    (Utc::now() - Duration::days(n)).to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn build_source(id: String, seed: u64, salt: u64) -> Source {
    let template = &SOURCE_TEMPLATES[(seed.wrapping_add(salt) % SOURCE_TEMPLATES.len() as u64) as usize];
    Source {
        id,
        name: template.name.to_string(),
        url: template.url.to_string(),
        publisher: template.publisher.to_string(),
        published_date: days_ago((unit(seed, salt) * 365.0) as i64),
        excerpt_text: template.excerpt.to_string(),
        highlights: vec![SourceHighlight {
            start_index: 0,
            end_index: template.excerpt.len().min(60),
        }],
        page_number: Some((unit(seed, salt.wrapping_add(1)) * 20.0) as u32 + 1),
    }
}

fn build_policy_grounding(seed: u64, salt: u64) -> PolicyGrounding {
    let quote = &POLICY_QUOTES[(seed.wrapping_add(salt) % POLICY_QUOTES.len() as u64) as usize];
    let page_number = (unit(seed, salt) * 15.0) as u32 + 1;
    let content = format!(
        "{}\n\n{}\n\nThis requirement applies to all business units and must be implemented in accordance with the timelines specified in Appendix A. Exceptions require written approval from the Chief Compliance Officer.",
        quote.context, quote.quote
    );
    PolicyGrounding {
        document_name: quote.doc.to_string(),
        quote: quote.quote.to_string(),
        context: quote.context.to_string(),
        page_number: Some(page_number),
        extended_context: Some(ExtendedContext {
            pages: vec![PolicyPage {
                page_number,
                content,
            }],
            highlight_page_index: 0,
        }),
    }
}

fn build_rubric_items(id_prefix: &str, seed: u64, group: u64, range: (f64, f64)) -> Vec<RubricItem> {
    let count = 5 + (seed.wrapping_add(group) % 3) as usize;
    (0..count)
        .map(|i| {
            let salt = group.wrapping_mul(100).wrapping_add(i as u64);
            let score = round1(range.0 + unit(seed, salt) * (range.1 - range.0));
            let category =
                CATEGORIES[(seed.wrapping_add(salt.wrapping_mul(7)) % CATEGORIES.len() as u64) as usize];
            let source_count = 2 + (seed.wrapping_add(salt) % 3) as usize;
            let sources = (0..source_count)
                .map(|j| {
                    build_source(
                        format!("{id_prefix}-src-{group}-{i}-{j}"),
                        seed,
                        salt.wrapping_mul(31).wrapping_add(j as u64),
                    )
                })
                .collect();
            let policy_grounding = if seed.wrapping_add(salt) % 10 >= 3 {
                Some(build_policy_grounding(seed, salt))
            } else {
                None
            };
            RubricItem {
                category: category.to_string(),
                rating: rating_for_score(score, salt as usize),
                score,
                sources,
                policy_grounding,
            }
        })
        .collect()
}

fn build_evaluation(
    id_prefix: &str,
    company_name: &str,
    industry: &str,
    website: &str,
    policy_range: (f64, f64),
    general_range: (f64, f64),
    days_offset: i64,
) -> EvaluationRecord {
    let seed = hash_seed(company_name);
    let created_at = days_ago(days_offset);
    let your_policy_concerns = build_rubric_items(id_prefix, seed, 1, policy_range);
    let general_policy_concerns = build_rubric_items(id_prefix, seed, 2, general_range);
    let scores = score_rubric(&your_policy_concerns, &general_policy_concerns);
    EvaluationRecord {
        id: format!("{id_prefix}-eval"),
        company_name: company_name.to_string(),
        company_info: CompanyInfo {
            website: website.to_string(),
            industry: industry.to_string(),
            additional_info: String::new(),
        },
        policy_rubric_id: format!("{id_prefix}-rubric"),
        status: EvaluationStatus::Completed,
        created_at: created_at.clone(),
        completed_at: Some(created_at.clone()),
        evaluation_results: vec![EvaluationResult {
            id: format!("{id_prefix}-result"),
            rubric_results: RubricResults {
                your_policy_concerns,
                general_policy_concerns,
            },
            scores,
            created_at,
        }],
    }
}

/// The fifteen seeded evaluations shown before any user submission.
pub fn seeded_evaluations() -> Vec<EvaluationRecord> {
    let companies: &[(&str, &str, &str, (f64, f64), (f64, f64), i64)] = &[
        ("Meridian Capital Group", "Financial Services", "https://meridiancapital.com", (7.5, 9.5), (7.0, 9.0), 3),
        ("Apex Cloud Solutions", "Technology", "https://apexcloud.io", (5.5, 7.5), (5.0, 7.8), 5),
        ("GreenLeaf Pharmaceuticals", "Healthcare", "https://greenleafpharma.com", (3.0, 5.5), (2.5, 5.0), 7),
        ("Titan Manufacturing Co.", "Manufacturing", "https://titanmfg.com", (7.8, 9.8), (7.5, 9.5), 10),
        ("Solaris Energy Partners", "Energy", "https://solarisenergy.com", (5.0, 7.0), (5.5, 7.5), 12),
        ("Pinnacle Retail Holdings", "Retail", "https://pinnacleretail.com", (8.0, 9.5), (7.5, 9.0), 15),
        ("Vanguard Logistics Inc.", "Transportation", "https://vanguardlogistics.com", (3.5, 5.5), (3.0, 5.0), 18),
        ("NovaTech Communications", "Telecommunications", "https://novatechcomm.com", (5.5, 7.8), (5.0, 7.5), 22),
        ("Harborview Real Estate", "Real Estate", "https://harborviewre.com", (7.5, 9.0), (8.0, 9.5), 25),
        ("Quantum Data Systems", "Technology", "https://quantumdata.io", (3.0, 5.0), (3.5, 5.5), 28),
        ("Pacific Coast Financial", "Financial Services", "https://pacificcoastfin.com", (5.5, 7.5), (6.0, 8.0), 32),
        ("Atlas Healthcare Group", "Healthcare", "https://atlashealthcare.com", (8.0, 9.5), (7.5, 9.0), 38),
        ("Sterling Construction", "Manufacturing", "https://sterlingconstruction.com", (5.0, 7.0), (5.5, 7.5), 42),
        ("Brightpath Education", "Other", "https://brightpathedu.org", (7.5, 9.0), (8.0, 9.5), 48),
        ("Redwood Analytics", "Technology", "https://redwoodanalytics.com", (5.5, 7.5), (5.0, 7.0), 55),
    ];
    companies
        .iter()
        .enumerate()
        .map(|(i, (name, industry, website, policy, general, days))| {
            build_evaluation(
                &format!("seed-{}", i + 1),
                name,
                industry,
                website,
                *policy,
                *general,
                *days,
            )
        })
        .collect()
}

/// Seeded policy documents for the document registry.
pub fn seeded_documents() -> Vec<StoredDocument> {
    vec![
        StoredDocument {
            id: "seed-doc-1".to_string(),
            name: "Customer Acquisition Policy v4.2.pdf".to_string(),
            size: 482_133,
            uploaded_at: "12/4/2025".to_string(),
        },
        StoredDocument {
            id: "seed-doc-2".to_string(),
            name: "AML-KYC Compliance Manual.pdf".to_string(),
            size: 1_240_960,
            uploaded_at: "12/4/2025".to_string(),
        },
        StoredDocument {
            id: "seed-doc-3".to_string(),
            name: "Enterprise Risk Management Policy.pdf".to_string(),
            size: 308_554,
            uploaded_at: "12/4/2025".to_string(),
        },
    ]
}

/// Build a full evaluation for a new submission without the external
/// service: score ranges are derived from the company name, today's
/// date is used, and the record id is unique within the process.
pub fn generate_fake_evaluation(company_name: &str, company_info: &CompanyInfo) -> EvaluationRecord {
    let seed = hash_seed(company_name);
    let n = GENERATED.fetch_add(1, Ordering::Relaxed);
    let policy_min = 4.5 + unit(seed, 3) * 3.0;
    let policy_max = (policy_min + 2.0 + unit(seed, 4) * 1.5).min(10.0);
    let general_min = 4.0 + unit(seed, 5) * 3.0;
    let general_max = (general_min + 2.0 + unit(seed, 6) * 1.5).min(10.0);
    let industry = if company_info.industry.is_empty() {
        "Other"
    } else {
        company_info.industry.as_str()
    };
    build_evaluation(
        &format!("local-{seed:08x}-{n}"),
        company_name,
        industry,
        &company_info.website,
        (policy_min, policy_max),
        (general_min, general_max),
        0,
    )
}
