//! # 四字母类型判定
//!
//! 每条轴两道题，每个选项为轴的一端投一票，多数决；
//! 平局（含无作答）取该轴的默认极性，见 [`crate::tables::axis_default`]。

use core::cmp::Ordering;

use quiz_common::{Framework, Signal, TypeAxis, TypeIndicator, TypePole};

use crate::tables;
use crate::validation::AnsweredQuestion;

/// 各极性得票（按 [`TypePole`] 声明顺序）
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PoleVotes([u32; 8]);

impl PoleVotes {
    pub fn vote(&mut self, pole: TypePole) {
        self.0[pole as usize] += 1;
    }

    pub fn get(&self, pole: TypePole) -> u32 {
        self.0[pole as usize]
    }

    /// 单条轴的结果
    pub fn resolve_axis(&self, axis: TypeAxis) -> TypePole {
        let (first, second) = axis.poles();
        match self.get(first).cmp(&self.get(second)) {
            Ordering::Greater => first,
            Ordering::Less => second,
            Ordering::Equal => tables::axis_default(axis),
        }
    }
}

/// 统计类型指标题的投票
pub fn count_votes(answers: &[AnsweredQuestion]) -> PoleVotes {
    let mut votes = PoleVotes::default();
    for answer in answers.iter().filter(|a| a.question.framework == Framework::TypeIndicator) {
        if let Some(Signal::Pole(pole)) = answer.choice().map(|c| c.signal) {
            votes.vote(pole);
        }
    }
    votes
}

/// 判定四字母类型
pub fn score_type_indicator(answers: &[AnsweredQuestion]) -> TypeIndicator {
    let votes = count_votes(answers);
    let [energy, perception, judgment, lifestyle] = TypeAxis::ALL.map(|axis| votes.resolve_axis(axis));
    TypeIndicator::from_preferences(
        energy == TypePole::Extravert,
        perception == TypePole::Sensing,
        judgment == TypePole::Thinking,
        lifestyle == TypePole::Judging,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::StandardBank;
    use crate::validation::validate_answers;
    use quiz_common::QuizAnswerSet;

    fn type_for(pairs: &[(u8, u8)]) -> TypeIndicator {
        let answers: QuizAnswerSet = pairs.iter().copied().collect();
        score_type_indicator(&validate_answers::<StandardBank>(&answers).unwrap())
    }

    #[test]
    fn unanimous_axes() {
        let first_poles: sp_std::vec::Vec<(u8, u8)> = (16..=23).map(|id| (id, 0)).collect();
        assert_eq!(type_for(&first_poles), TypeIndicator::Estj);

        let second_poles: sp_std::vec::Vec<(u8, u8)> = (16..=23).map(|id| (id, 3)).collect();
        assert_eq!(type_for(&second_poles), TypeIndicator::Infp);
    }

    #[test]
    fn split_axes_fall_back_to_defaults() {
        // 每条轴一票对一票
        let split = [(16, 0), (17, 2), (18, 1), (19, 3), (20, 0), (21, 3), (22, 2), (23, 1)];
        assert_eq!(type_for(&split), TypeIndicator::Infj);
    }

    #[test]
    fn no_type_answers_yield_default_code() {
        assert_eq!(type_for(&[(11, 0)]), TypeIndicator::Infj);
    }

    #[test]
    fn single_vote_decides_an_axis() {
        assert_eq!(type_for(&[(16, 1), (22, 3)]), TypeIndicator::Enfp);
    }
}
