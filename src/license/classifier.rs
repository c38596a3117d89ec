use crate::models::LicenseKind;

/// License families whose fetched text is trusted enough to embed in the notice.
pub const EMBED_WHITELIST: [LicenseKind; 12] = [
    LicenseKind::Apache2,
    LicenseKind::Mit,
    LicenseKind::Bsd2Clause,
    LicenseKind::Bsd3Clause,
    LicenseKind::Isc,
    LicenseKind::Gpl,
    LicenseKind::Lgpl,
    LicenseKind::Agpl,
    LicenseKind::Mpl,
    LicenseKind::Epl,
    LicenseKind::SilOfl,
    LicenseKind::CreativeCommons,
];

/// Guess the license family of a full license text.
///
/// Plain case-insensitive substring checks, evaluated in a fixed order: the first
/// matching signature wins, so `LGPL` has to be tested before `GPL` and so on.
/// Loose signatures such as `mpl` or `sil` also match inside ordinary words.
pub fn classify_license_text(text: &str) -> LicenseKind {
    if text.is_empty() {
        return LicenseKind::Unknown;
    }
    let lower = text.to_lowercase();
    let has = |needle: &str| lower.contains(needle);

    if has("apache license") || has("apache.org/licenses") {
        return LicenseKind::Apache2;
    }
    if has("mit license") || has("permission is hereby granted, free of charge") {
        return LicenseKind::Mit;
    }
    if has("bsd") && (has("2-clause") || has("3-clause") || has("bsd license")) {
        if has("3-clause") || has("three-clause") {
            return LicenseKind::Bsd3Clause;
        }
        return LicenseKind::Bsd2Clause;
    }
    if has("isc license") {
        return LicenseKind::Isc;
    }
    if has("gnu lesser general public") || has("lgpl") {
        return LicenseKind::Lgpl;
    }
    if has("gnu affero general public") || has("agpl") {
        return LicenseKind::Agpl;
    }
    if has("gnu general public") || has(" gpl ") {
        return LicenseKind::Gpl;
    }
    if has("mozilla public") || has("mpl") {
        return LicenseKind::Mpl;
    }
    if has("eclipse public") || has("epl") {
        return LicenseKind::Epl;
    }
    if has("open font license") || has("ofl") || has("sil") {
        return LicenseKind::SilOfl;
    }
    if has("creative commons") || has("creativecommons") {
        return LicenseKind::CreativeCommons;
    }
    if has("opensource.org/licenses/mit") {
        return LicenseKind::Mit;
    }
    LicenseKind::Unknown
}

/// Whether fetched text of this family may be embedded without `--embed-all`.
pub fn is_embeddable(kind: LicenseKind) -> bool {
    EMBED_WHITELIST.contains(&kind)
}
