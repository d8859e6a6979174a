//! # 优势、挑战与理想伴侣特质
//!
//! - 优势：维度值 ≥ 70，按值降序、同值按维度顺序，取前 N 个
//! - 挑战：维度值 ≤ 35，按值升序、同值按维度顺序，取前 N 个
//! - 理想伴侣：依恋类型对应的特质在前，其后按题目 ID 升序追加价值观题的特质，去重后截断

use quiz_common::{
    AttachmentStyle, Dimension, EmotionalIntelligence, Framework, Insight, PartnerTrait,
    PersonalityTraits, Score, Signal,
};
use sp_std::vec::Vec;

use crate::tables::{
    attachment_partner_trait, challenge_phrase, strength_phrase, CHALLENGE_THRESHOLD,
    STRENGTH_THRESHOLD,
};
use crate::validation::AnsweredQuestion;

fn dimension_values(traits: &PersonalityTraits, eq: &EmotionalIntelligence) -> Vec<(Dimension, Score)> {
    Dimension::ALL
        .iter()
        .map(|d| (*d, d.value_in(traits, eq)))
        .collect()
}

/// 选出优势维度
pub fn strength_dimensions(
    traits: &PersonalityTraits,
    eq: &EmotionalIntelligence,
    limit: usize,
) -> Vec<Dimension> {
    let mut candidates: Vec<(Dimension, Score)> = dimension_values(traits, eq)
        .into_iter()
        .filter(|(_, value)| *value >= STRENGTH_THRESHOLD)
        .collect();
    candidates.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    candidates.into_iter().take(limit).map(|(d, _)| d).collect()
}

/// 选出挑战维度
pub fn challenge_dimensions(
    traits: &PersonalityTraits,
    eq: &EmotionalIntelligence,
    limit: usize,
) -> Vec<Dimension> {
    let mut candidates: Vec<(Dimension, Score)> = dimension_values(traits, eq)
        .into_iter()
        .filter(|(_, value)| *value <= CHALLENGE_THRESHOLD)
        .collect();
    candidates.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0)));
    candidates.into_iter().take(limit).map(|(d, _)| d).collect()
}

pub fn strengths(traits: &PersonalityTraits, eq: &EmotionalIntelligence, limit: usize) -> Vec<Insight> {
    strength_dimensions(traits, eq, limit).into_iter().map(strength_phrase).collect()
}

pub fn challenges(traits: &PersonalityTraits, eq: &EmotionalIntelligence, limit: usize) -> Vec<Insight> {
    challenge_dimensions(traits, eq, limit).into_iter().map(challenge_phrase).collect()
}

/// 理想伴侣特质
pub fn ideal_partner_traits(
    style: AttachmentStyle,
    answers: &[AnsweredQuestion],
    limit: usize,
) -> Vec<PartnerTrait> {
    let from_values = answers
        .iter()
        .filter(|a| a.question.framework == Framework::Values)
        .filter_map(|a| match a.choice().map(|c| c.signal) {
            Some(Signal::Partner(value)) => Some(value),
            _ => None,
        });

    let mut result: Vec<PartnerTrait> = Vec::with_capacity(limit);
    for value in core::iter::once(attachment_partner_trait(style)).chain(from_values) {
        if result.len() >= limit {
            break;
        }
        if !result.contains(&value) {
            result.push(value);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::StandardBank;
    use crate::validation::validate_answers;
    use quiz_common::QuizAnswerSet;

    #[test]
    fn strengths_sorted_by_value_then_dimension_order() {
        let traits = PersonalityTraits {
            openness: 80,
            conscientiousness: 95,
            extraversion: 70,
            agreeableness: 95,
            neuroticism: 50,
        };
        let eq = EmotionalIntelligence::default();
        assert_eq!(
            strength_dimensions(&traits, &eq, 3),
            [Dimension::Conscientiousness, Dimension::Agreeableness, Dimension::Openness]
        );
        assert_eq!(
            strengths(&traits, &eq, 3),
            [Insight::Dependable, Insight::Warmhearted, Insight::OpenMinded]
        );
    }

    #[test]
    fn high_neuroticism_is_a_challenge() {
        let traits = PersonalityTraits { neuroticism: 90, ..Default::default() };
        let eq = EmotionalIntelligence { empathy: 35, ..Default::default() };
        assert_eq!(
            challenge_dimensions(&traits, &eq, 3),
            [Dimension::EmotionalStability, Dimension::Empathy]
        );
        assert_eq!(challenges(&traits, &eq, 3), [Insight::Reactive, Insight::Detached]);
    }

    #[test]
    fn neutral_profile_has_no_insights() {
        let traits = PersonalityTraits::default();
        let eq = EmotionalIntelligence::default();
        assert!(strengths(&traits, &eq, 3).is_empty());
        assert!(challenges(&traits, &eq, 3).is_empty());
    }

    #[test]
    fn partner_traits_deduplicate_and_cap() {
        // 34:0 Loyal, 36:3 FamilyOriented, 40:0 Loyal(重复), 37:0 Supportive, 38:1 Ambitious, 39:0 Reliable
        let answers: QuizAnswerSet =
            [(34, 0), (36, 3), (37, 0), (38, 1), (39, 0), (40, 0)].into_iter().collect();
        let answered = validate_answers::<StandardBank>(&answers).unwrap();
        assert_eq!(
            ideal_partner_traits(AttachmentStyle::Anxious, &answered, 5),
            [
                PartnerTrait::Reliable,
                PartnerTrait::Loyal,
                PartnerTrait::FamilyOriented,
                PartnerTrait::Supportive,
                PartnerTrait::Ambitious,
            ]
        );
    }

    #[test]
    fn partner_traits_without_values_answers() {
        let answers: QuizAnswerSet = [(11, 2)].into_iter().collect();
        let answered = validate_answers::<StandardBank>(&answers).unwrap();
        assert_eq!(
            ideal_partner_traits(AttachmentStyle::Avoidant, &answered, 5),
            [PartnerTrait::Patient]
        );
    }
}
