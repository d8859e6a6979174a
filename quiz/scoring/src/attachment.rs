//! # 依恋类型判定
//!
//! 每个选项预先标注支持的依恋类型及分值。累加后取最高分；
//! 同分时按 安全 > 焦虑 > 回避 > 恐惧 的固定优先级决出。

use quiz_common::{AttachmentStyle, Framework, Signal};

use crate::validation::AnsweredQuestion;

/// 各依恋类型的累计得分（按 [`AttachmentStyle`] 声明顺序）
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AttachmentTally([u32; 4]);

impl AttachmentTally {
    pub fn add(&mut self, style: AttachmentStyle, points: u8) {
        let slot = &mut self.0[style as usize];
        *slot = slot.saturating_add(points as u32);
    }

    pub fn get(&self, style: AttachmentStyle) -> u32 {
        self.0[style as usize]
    }

    /// 取最高分，同分按优先级
    pub fn resolve(&self) -> AttachmentStyle {
        let mut best = AttachmentStyle::PRIORITY[0];
        for style in AttachmentStyle::PRIORITY {
            // 严格大于才替换，先出现的高优先级类型保留
            if self.get(style) > self.get(best) {
                best = style;
            }
        }
        best
    }
}

/// 累加依恋题的得分
pub fn tally_attachment(answers: &[AnsweredQuestion]) -> AttachmentTally {
    let mut tally = AttachmentTally::default();
    for answer in answers.iter().filter(|a| a.question.framework == Framework::Attachment) {
        if let Some(Signal::Attachment(styles)) = answer.choice().map(|c| c.signal) {
            for (style, points) in styles.iter() {
                tally.add(*style, *points);
            }
        }
    }
    tally
}

/// 判定依恋类型（无依恋题作答时为安全型）
pub fn score_attachment(answers: &[AnsweredQuestion]) -> AttachmentStyle {
    tally_attachment(answers).resolve()
}
