//! # 双人兼容性对比
//!
//! ```text
//! 依恋组合 = ATTACHMENT_PAIR_SCORES[a][b]
//! 人格契合 = 100 - round(Σ|Δ大五| / 5)
//! 情商     = round((情商a + 情商b) / 2)
//! score   = (依恋组合 × 40 + 人格契合 × 35 + 情商 × 25) / 100
//! ```
//!
//! 所有计算对参数顺序对称，`compare(a, b)` 与 `compare(b, a)` 结果一致。

use frame_support::{ensure, traits::Get};
use quiz_common::{
    rounded_mean, BigFive, CompatibilityProfile, CompatibilitySummary, Dimension, EqDomain,
    FrictionPoint, MatchRecommendation, ProfileDefect, QuestionBank, Score, ScoringError, MAX_SCORE,
};
use sp_std::vec::Vec;

use crate::risk::classify_risk;
use crate::tables::{
    attachment_pair_score, ATTACHMENT_FRICTION_MAX, CHALLENGE_THRESHOLD, COMPARE_WEIGHT_ALIGNMENT,
    COMPARE_WEIGHT_ATTACHMENT, COMPARE_WEIGHT_EQ, HIGH_NEUROTICISM, STRENGTH_THRESHOLD,
    TRAIT_DELTA_FRICTION,
};
use crate::ScoringConfig;

/// 检查画像是否满足取值范围、列表上限与内部一致性
///
/// 画像通常来自外部存储，对比前必须校验。
pub fn validate_profile<C: ScoringConfig>(profile: &CompatibilityProfile) -> Result<(), ScoringError> {
    for dimension in BigFive::ALL {
        ensure!(
            profile.personality_traits.get(dimension) <= MAX_SCORE,
            ProfileDefect::TraitOutOfRange(dimension)
        );
    }
    for domain in EqDomain::ALL {
        ensure!(
            profile.emotional_intelligence.get(domain) <= MAX_SCORE,
            ProfileDefect::EqOutOfRange(domain)
        );
    }
    ensure!(profile.risk_score <= MAX_SCORE, ProfileDefect::RiskOutOfRange);
    ensure!(profile.color == classify_risk(profile.risk_score), ProfileDefect::ColorMismatch);
    ensure!(profile.bank_version == C::Bank::version(), ProfileDefect::BankVersionMismatch);
    ensure!(
        profile.answered_count >= 1
            && profile.answered_count as usize <= C::Bank::questions().len(),
        ProfileDefect::AnsweredCountOutOfRange
    );

    let insights = &profile.strengths_weaknesses;
    ensure!(
        insights.strengths.len() <= C::MaxStrengths::get() as usize,
        ProfileDefect::TooManyStrengths
    );
    ensure!(
        insights.challenges.len() <= C::MaxChallenges::get() as usize,
        ProfileDefect::TooManyChallenges
    );
    ensure!(
        insights.ideal_partner_traits.len() <= C::MaxPartnerTraits::get() as usize,
        ProfileDefect::TooManyPartnerTraits
    );
    ensure!(
        !has_duplicates(&insights.strengths) && !has_duplicates(&insights.challenges),
        ProfileDefect::DuplicateInsight
    );
    ensure!(
        !has_duplicates(&insights.ideal_partner_traits),
        ProfileDefect::DuplicatePartnerTrait
    );
    Ok(())
}

fn has_duplicates<T: PartialEq>(items: &[T]) -> bool {
    items.iter().enumerate().any(|(i, item)| items[..i].contains(item))
}

fn delta(a: Score, b: Score) -> Score {
    a.abs_diff(b)
}

/// 大五人格契合度 (0-100)，差距越小越高
pub fn trait_alignment(a: &CompatibilityProfile, b: &CompatibilityProfile) -> Score {
    let total: u32 = BigFive::ALL
        .iter()
        .map(|d| delta(a.personality_traits.get(*d), b.personality_traits.get(*d)) as u32)
        .sum();
    MAX_SCORE.saturating_sub(rounded_mean(total, BigFive::ALL.len() as u32))
}

/// 一方擅长、另一方也不拖后腿的维度
///
/// 按双方合计值降序、同值按维度顺序排列，最多 `limit` 个。
pub fn complementary_strengths(
    a: &CompatibilityProfile,
    b: &CompatibilityProfile,
    limit: usize,
) -> Vec<Dimension> {
    let mut candidates: Vec<(Dimension, u32)> = Dimension::ALL
        .iter()
        .filter_map(|d| {
            let (va, vb) = (a.dimension(*d), b.dimension(*d));
            (va.max(vb) >= STRENGTH_THRESHOLD && va.min(vb) > CHALLENGE_THRESHOLD)
                .then(|| (*d, va as u32 + vb as u32))
        })
        .collect();
    candidates.sort_by(|x, y| y.1.cmp(&x.1).then(x.0.cmp(&y.0)));
    candidates.into_iter().take(limit).map(|(d, _)| d).collect()
}

/// 摩擦点（固定顺序）
pub fn friction_points(a: &CompatibilityProfile, b: &CompatibilityProfile) -> Vec<FrictionPoint> {
    let (ta, tb) = (&a.personality_traits, &b.personality_traits);
    let mut points = Vec::new();

    if attachment_pair_score(a.attachment_style, b.attachment_style) <= ATTACHMENT_FRICTION_MAX {
        points.push(FrictionPoint::AttachmentMismatch);
    }
    if delta(ta.neuroticism, tb.neuroticism) >= TRAIT_DELTA_FRICTION
        || (ta.neuroticism >= HIGH_NEUROTICISM && tb.neuroticism >= HIGH_NEUROTICISM)
    {
        points.push(FrictionPoint::EmotionalVolatility);
    }
    if delta(ta.extraversion, tb.extraversion) >= TRAIT_DELTA_FRICTION {
        points.push(FrictionPoint::SocialEnergyGap);
    }
    if delta(ta.conscientiousness, tb.conscientiousness) >= TRAIT_DELTA_FRICTION {
        points.push(FrictionPoint::PlanningStyleClash);
    }
    if delta(ta.openness, tb.openness) >= TRAIT_DELTA_FRICTION {
        points.push(FrictionPoint::NoveltyGap);
    }
    if a.emotional_intelligence.empathy <= CHALLENGE_THRESHOLD
        || b.emotional_intelligence.empathy <= CHALLENGE_THRESHOLD
    {
        points.push(FrictionPoint::EmpathyGap);
    }
    points
}

/// 对比两份画像
///
/// ## 返回
/// - `Ok(summary)`: 对比结果
/// - `Err(InvalidProfile)`: 任一画像越界
pub fn compare_profiles<C: ScoringConfig>(
    a: &CompatibilityProfile,
    b: &CompatibilityProfile,
) -> Result<CompatibilitySummary, ScoringError> {
    validate_profile::<C>(a)?;
    validate_profile::<C>(b)?;

    let pair = attachment_pair_score(a.attachment_style, b.attachment_style) as u32;
    let alignment = trait_alignment(a, b) as u32;
    let eq = rounded_mean(
        a.emotional_intelligence.average() as u32 + b.emotional_intelligence.average() as u32,
        2,
    ) as u32;

    let weighted = pair * COMPARE_WEIGHT_ATTACHMENT
        + alignment * COMPARE_WEIGHT_ALIGNMENT
        + eq * COMPARE_WEIGHT_EQ;
    let score = (weighted / 100).min(MAX_SCORE as u32) as Score;

    Ok(CompatibilitySummary {
        score,
        recommendation: MatchRecommendation::from_score(score),
        complementary_strengths: complementary_strengths(a, b, C::MaxStrengths::get() as usize),
        friction_points: friction_points(a, b),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DefaultScoringConfig;
    use quiz_common::{
        AttachmentStyle, ColorBucket, EmotionalIntelligence, Insight, PartnerTrait,
        PersonalityTraits, StrengthsWeaknesses, TypeIndicator,
    };

    fn profile(style: AttachmentStyle, traits: PersonalityTraits, eq: EmotionalIntelligence) -> CompatibilityProfile {
        CompatibilityProfile {
            color: ColorBucket::Yellow,
            risk_score: 50,
            personality_traits: traits,
            attachment_style: style,
            type_indicator: TypeIndicator::Infj,
            emotional_intelligence: eq,
            strengths_weaknesses: StrengthsWeaknesses::default(),
            answered_count: 40,
            bank_version: 1,
        }
    }

    fn neutral(style: AttachmentStyle) -> CompatibilityProfile {
        profile(style, PersonalityTraits::default(), EmotionalIntelligence::default())
    }

    #[test]
    fn neutral_secure_pair() {
        let a = neutral(AttachmentStyle::Secure);
        let summary = compare_profiles::<DefaultScoringConfig>(&a, &a).unwrap();
        // (100×40 + 100×35 + 50×25) / 100
        assert_eq!(summary.score, 87);
        assert_eq!(summary.recommendation, MatchRecommendation::GoodMatch);
        assert!(summary.complementary_strengths.is_empty());
        assert!(summary.friction_points.is_empty());
    }

    #[test]
    fn anxious_avoidant_pair_is_flagged() {
        let a = neutral(AttachmentStyle::Anxious);
        let b = neutral(AttachmentStyle::Avoidant);
        let summary = compare_profiles::<DefaultScoringConfig>(&a, &b).unwrap();
        // (25×40 + 100×35 + 50×25) / 100
        assert_eq!(summary.score, 57);
        assert_eq!(summary.recommendation, MatchRecommendation::NeedsWork);
        assert_eq!(summary.friction_points, [FrictionPoint::AttachmentMismatch]);
    }

    #[test]
    fn comparison_is_symmetric() {
        let a = profile(
            AttachmentStyle::Anxious,
            PersonalityTraits {
                openness: 90,
                conscientiousness: 20,
                extraversion: 75,
                agreeableness: 60,
                neuroticism: 80,
            },
            EmotionalIntelligence { empathy: 30, ..Default::default() },
        );
        let b = profile(
            AttachmentStyle::Fearful,
            PersonalityTraits {
                openness: 40,
                conscientiousness: 85,
                extraversion: 20,
                agreeableness: 95,
                neuroticism: 70,
            },
            EmotionalIntelligence { social_skills: 90, ..Default::default() },
        );
        let ab = compare_profiles::<DefaultScoringConfig>(&a, &b).unwrap();
        let ba = compare_profiles::<DefaultScoringConfig>(&b, &a).unwrap();
        assert_eq!(ab, ba);
        assert_eq!(
            ab.friction_points,
            [
                FrictionPoint::AttachmentMismatch,
                FrictionPoint::EmotionalVolatility,
                FrictionPoint::SocialEnergyGap,
                FrictionPoint::PlanningStyleClash,
                FrictionPoint::NoveltyGap,
                FrictionPoint::EmpathyGap,
            ]
        );
    }

    #[test]
    fn complementary_strengths_need_both_sides_above_challenge() {
        let a = profile(
            AttachmentStyle::Secure,
            PersonalityTraits { openness: 90, extraversion: 80, ..Default::default() },
            EmotionalIntelligence::default(),
        );
        let b = profile(
            AttachmentStyle::Secure,
            PersonalityTraits { openness: 60, extraversion: 30, ..Default::default() },
            EmotionalIntelligence::default(),
        );
        assert_eq!(complementary_strengths(&a, &b, 3), [Dimension::Openness]);
    }

    #[test]
    fn alignment_uses_rounded_mean_of_deltas() {
        let a = neutral(AttachmentStyle::Secure);
        let b = profile(
            AttachmentStyle::Secure,
            PersonalityTraits { openness: 53, ..Default::default() },
            EmotionalIntelligence::default(),
        );
        // 3 / 5 = 0.6 → 1
        assert_eq!(trait_alignment(&a, &b), 99);
    }

    #[test]
    fn out_of_range_trait_is_rejected() {
        let a = neutral(AttachmentStyle::Secure);
        let b = profile(
            AttachmentStyle::Secure,
            PersonalityTraits { agreeableness: 101, ..Default::default() },
            EmotionalIntelligence::default(),
        );
        assert_eq!(
            compare_profiles::<DefaultScoringConfig>(&a, &b),
            Err(ScoringError::InvalidProfile(ProfileDefect::TraitOutOfRange(BigFive::Agreeableness)))
        );
    }

    #[test]
    fn oversized_lists_are_rejected() {
        let mut a = neutral(AttachmentStyle::Secure);
        a.strengths_weaknesses.strengths = [Insight::OpenMinded; 4].to_vec();
        assert_eq!(
            validate_profile::<DefaultScoringConfig>(&a),
            Err(ScoringError::InvalidProfile(ProfileDefect::TooManyStrengths))
        );

        let mut b = neutral(AttachmentStyle::Secure);
        b.risk_score = 120;
        assert_eq!(
            validate_profile::<DefaultScoringConfig>(&b),
            Err(ScoringError::InvalidProfile(ProfileDefect::RiskOutOfRange))
        );
    }

    #[test]
    fn self_contradicting_profiles_are_rejected() {
        let defect = |profile: &CompatibilityProfile| match validate_profile::<DefaultScoringConfig>(profile) {
            Err(ScoringError::InvalidProfile(defect)) => Some(defect),
            _ => None,
        };

        let mut p = neutral(AttachmentStyle::Secure);
        p.color = ColorBucket::Red;
        assert_eq!(defect(&p), Some(ProfileDefect::ColorMismatch));

        let mut p = neutral(AttachmentStyle::Secure);
        p.bank_version = 99;
        assert_eq!(defect(&p), Some(ProfileDefect::BankVersionMismatch));

        let mut p = neutral(AttachmentStyle::Secure);
        p.answered_count = 250;
        assert_eq!(defect(&p), Some(ProfileDefect::AnsweredCountOutOfRange));
        p.answered_count = 0;
        assert_eq!(defect(&p), Some(ProfileDefect::AnsweredCountOutOfRange));

        let mut p = neutral(AttachmentStyle::Secure);
        p.strengths_weaknesses.strengths = [Insight::OpenMinded, Insight::OpenMinded].to_vec();
        assert_eq!(defect(&p), Some(ProfileDefect::DuplicateInsight));

        let mut p = neutral(AttachmentStyle::Secure);
        p.strengths_weaknesses.challenges = [Insight::Reactive, Insight::Critical, Insight::Reactive].to_vec();
        assert_eq!(defect(&p), Some(ProfileDefect::DuplicateInsight));

        let mut p = neutral(AttachmentStyle::Secure);
        p.strengths_weaknesses.ideal_partner_traits = [PartnerTrait::Calm, PartnerTrait::Calm].to_vec();
        assert_eq!(defect(&p), Some(ProfileDefect::DuplicatePartnerTrait));
    }

    #[test]
    fn contradicting_profile_cannot_be_compared() {
        let a = neutral(AttachmentStyle::Secure);
        let mut b = neutral(AttachmentStyle::Secure);
        b.color = ColorBucket::Green;
        assert_eq!(
            compare_profiles::<DefaultScoringConfig>(&a, &b),
            Err(ScoringError::InvalidProfile(ProfileDefect::ColorMismatch))
        );
    }
}
