//! # 答卷校验
//!
//! 评分入口的边界检查。按题目 ID 升序逐题校验，遇到第一处错误即返回。

use frame_support::ensure;
use quiz_common::{
    Choice, OptionIndex, Question, QuestionBank, QuizAnswerSet, ScoringError, Signal,
};
use sp_std::vec::Vec;

/// 通过校验的单题作答
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnsweredQuestion {
    pub question: &'static Question,
    pub option: OptionIndex,
}

impl AnsweredQuestion {
    /// 所选选项（校验后必然存在）
    pub fn choice(&self) -> Option<&'static Choice> {
        self.question.choice(self.option)
    }
}

/// 可计分的选项数
///
/// 按权重表计分的题目还受权重表长度限制，表缺失时没有可计分的选项。
pub fn scorable_options<B: QuestionBank>(question: &Question) -> u8 {
    let scaled = question.options.iter().any(|choice| choice.signal == Signal::Scaled);
    match question.label {
        Some(label) if scaled => {
            let weights = B::weights(label).map_or(0, |weights| weights.len());
            question.option_count().min(weights.min(u8::MAX as usize) as u8)
        }
        _ => question.option_count(),
    }
}

/// 校验答卷并解析出题目
///
/// ## 返回
/// - `Ok(answers)`: 按题目 ID 升序的作答列表
/// - `Err(InsufficientData)`: 答卷为空
/// - `Err(UnknownQuestionId)`: 题目不在题库中
/// - `Err(OptionIndexOutOfRange)`: 选项超出范围（含权重表覆盖不到的选项）
pub fn validate_answers<B: QuestionBank>(
    answers: &QuizAnswerSet,
) -> Result<Vec<AnsweredQuestion>, ScoringError> {
    ensure!(!answers.is_empty(), ScoringError::InsufficientData);

    answers
        .iter()
        .map(|(question_id, option)| -> Result<AnsweredQuestion, ScoringError> {
            let question =
                B::question(question_id).ok_or(ScoringError::UnknownQuestionId { question_id })?;
            let option_count = scorable_options::<B>(question);
            ensure!(
                option < option_count,
                ScoringError::OptionIndexOutOfRange { question_id, option, option_count }
            );
            Ok(AnsweredQuestion { question, option })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::StandardBank;
    use quiz_common::{Score, TraitLabel};

    #[test]
    fn empty_answer_set_is_insufficient() {
        assert_eq!(
            validate_answers::<StandardBank>(&QuizAnswerSet::new()),
            Err(ScoringError::InsufficientData)
        );
    }

    #[test]
    fn first_error_in_id_order_wins() {
        let answers: QuizAnswerSet = [(41, 0), (1, 99)].into_iter().collect();
        assert_eq!(
            validate_answers::<StandardBank>(&answers),
            Err(ScoringError::OptionIndexOutOfRange { question_id: 1, option: 99, option_count: 4 })
        );
    }

    #[test]
    fn question_zero_is_unknown() {
        let answers: QuizAnswerSet = [(0, 0)].into_iter().collect();
        assert_eq!(
            validate_answers::<StandardBank>(&answers),
            Err(ScoringError::UnknownQuestionId { question_id: 0 })
        );
    }

    #[test]
    fn last_option_is_accepted() {
        let answers: QuizAnswerSet = [(1, 3), (40, 3)].into_iter().collect();
        let validated = validate_answers::<StandardBank>(&answers).unwrap();
        assert_eq!(validated.len(), 2);
        assert_eq!(validated[0].question.id, 1);
        assert_eq!(validated[1].question.id, 40);
    }

    /// 权重表只覆盖前两个选项的题库
    struct TruncatedBank;

    impl QuestionBank for TruncatedBank {
        fn version() -> u8 {
            StandardBank::version()
        }

        fn questions() -> &'static [Question] {
            StandardBank::questions()
        }

        fn weights(label: TraitLabel) -> Option<&'static [Score]> {
            StandardBank::weights(label).map(|weights| &weights[..2])
        }
    }

    #[test]
    fn option_without_weight_is_rejected() {
        let answers: QuizAnswerSet = [(1, 1)].into_iter().collect();
        assert!(validate_answers::<TruncatedBank>(&answers).is_ok());

        let answers: QuizAnswerSet = [(1, 3)].into_iter().collect();
        assert_eq!(
            validate_answers::<TruncatedBank>(&answers),
            Err(ScoringError::OptionIndexOutOfRange { question_id: 1, option: 3, option_count: 2 })
        );
    }

    #[test]
    fn unweighted_questions_keep_their_option_count() {
        // 依恋题与价值观题不查权重表
        let answers: QuizAnswerSet = [(11, 3), (40, 3)].into_iter().collect();
        assert_eq!(validate_answers::<TruncatedBank>(&answers).map(|v| v.len()), Ok(2));
    }

    #[test]
    fn standard_bank_weights_cover_every_option() {
        for question in StandardBank::questions() {
            assert_eq!(scorable_options::<StandardBank>(question), question.option_count());
        }
    }
}
