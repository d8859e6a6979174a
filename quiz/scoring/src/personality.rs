//! # 人格与情商计分
//!
//! 每个维度取所属题目所选选项的权重（见 [`crate::tables`]），四舍五入求平均。
//! 该维度没有任何作答时取中性分 50。

use quiz_common::{
    rounded_mean, BigFive, EmotionalIntelligence, EqDomain, PersonalityTraits, QuestionBank,
    Score, TraitLabel, NEUTRAL_SCORE,
};

use crate::validation::AnsweredQuestion;

/// 计算单个维度的评分
pub fn scaled_score<B: QuestionBank>(answers: &[AnsweredQuestion], label: TraitLabel) -> Score {
    let Some(weights) = B::weights(label) else {
        return NEUTRAL_SCORE;
    };

    let (sum, count) = answers
        .iter()
        .filter(|answer| answer.question.label == Some(label))
        .filter_map(|answer| weights.get(answer.option as usize))
        .fold((0u32, 0u32), |(sum, count), weight| (sum + *weight as u32, count + 1));

    rounded_mean(sum, count)
}

/// 计算大五人格评分
pub fn score_personality_traits<B: QuestionBank>(answers: &[AnsweredQuestion]) -> PersonalityTraits {
    let mut traits = PersonalityTraits::default();
    for dimension in BigFive::ALL {
        traits.set(dimension, scaled_score::<B>(answers, TraitLabel::BigFive(dimension)));
    }
    traits
}

/// 计算情商评分
pub fn score_emotional_intelligence<B: QuestionBank>(
    answers: &[AnsweredQuestion],
) -> EmotionalIntelligence {
    let mut eq = EmotionalIntelligence::default();
    for domain in EqDomain::ALL {
        eq.set(domain, scaled_score::<B>(answers, TraitLabel::Eq(domain)));
    }
    eq
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::StandardBank;
    use crate::validation::validate_answers;
    use quiz_common::QuizAnswerSet;

    fn answered(pairs: &[(u8, u8)]) -> sp_std::vec::Vec<AnsweredQuestion> {
        let answers: QuizAnswerSet = pairs.iter().copied().collect();
        validate_answers::<StandardBank>(&answers).unwrap()
    }

    #[test]
    fn single_answer_uses_table_weight() {
        let answers = answered(&[(1, 1)]);
        assert_eq!(
            scaled_score::<StandardBank>(&answers, TraitLabel::BigFive(BigFive::Openness)),
            70
        );
    }

    #[test]
    fn two_answers_round_half_up() {
        // 神经质 (100 + 65) / 2 = 82.5 → 83
        let answers = answered(&[(9, 3), (10, 2)]);
        let traits = score_personality_traits::<StandardBank>(&answers);
        assert_eq!(traits.neuroticism, 83);
    }

    #[test]
    fn unanswered_dimensions_stay_neutral() {
        let answers = answered(&[(3, 0)]);
        let traits = score_personality_traits::<StandardBank>(&answers);
        assert_eq!(traits.conscientiousness, 100);
        assert_eq!(traits.openness, NEUTRAL_SCORE);
        assert_eq!(traits.neuroticism, NEUTRAL_SCORE);

        let eq = score_emotional_intelligence::<StandardBank>(&answers);
        assert_eq!(eq, EmotionalIntelligence::default());
    }

    #[test]
    fn eq_domains_use_their_own_tables() {
        let answers = answered(&[(28, 2), (29, 2), (30, 1)]);
        let eq = score_emotional_intelligence::<StandardBank>(&answers);
        assert_eq!(eq.motivation, 30);
        assert_eq!(eq.empathy, 75);
        assert_eq!(eq.self_awareness, NEUTRAL_SCORE);
    }

    #[test]
    fn axis_labels_have_no_weights() {
        let answers = answered(&[(16, 0)]);
        assert_eq!(
            scaled_score::<StandardBank>(&answers, TraitLabel::Axis(quiz_common::TypeAxis::EnergySource)),
            NEUTRAL_SCORE
        );
    }
}
