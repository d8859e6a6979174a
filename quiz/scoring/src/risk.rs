//! # 风险值与颜色分级
//!
//! ```text
//! 情绪平衡 = (神经质 + 100 - 宜人性) / 2
//! risk = (依恋风险 × 40 + (100 - 情商均分) × 30 + 情绪平衡 × 30) / 100
//! ```
//!
//! `risk ≤ 35` 绿色，`risk ≤ 60` 黄色，其余红色。

use quiz_common::{
    AttachmentStyle, ColorBucket, EmotionalIntelligence, PersonalityTraits, Score, MAX_SCORE,
};

use crate::tables::{
    attachment_risk, GREEN_MAX_RISK, RISK_WEIGHT_ATTACHMENT, RISK_WEIGHT_BALANCE, RISK_WEIGHT_EQ,
    YELLOW_MAX_RISK,
};

/// 神经质相对宜人性的失衡程度 (0-100)
pub fn emotional_balance(traits: &PersonalityTraits) -> Score {
    let raw = traits.neuroticism as u32 + MAX_SCORE as u32 - traits.agreeableness.min(MAX_SCORE) as u32;
    (raw / 2).min(MAX_SCORE as u32) as Score
}

/// 计算风险值 (0-100)
pub fn risk_score(
    style: AttachmentStyle,
    traits: &PersonalityTraits,
    eq: &EmotionalIntelligence,
) -> Score {
    let eq_risk = MAX_SCORE.saturating_sub(eq.average()) as u32;
    let weighted = attachment_risk(style) as u32 * RISK_WEIGHT_ATTACHMENT
        + eq_risk * RISK_WEIGHT_EQ
        + emotional_balance(traits) as u32 * RISK_WEIGHT_BALANCE;
    (weighted / 100).min(MAX_SCORE as u32) as Score
}

/// 风险值 → 颜色（两个阈值均为闭区间上界）
pub fn classify_risk(risk: Score) -> ColorBucket {
    match risk {
        r if r <= GREEN_MAX_RISK => ColorBucket::Green,
        r if r <= YELLOW_MAX_RISK => ColorBucket::Yellow,
        _ => ColorBucket::Red,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_risk_boundaries() {
        assert_eq!(classify_risk(0), ColorBucket::Green);
        assert_eq!(classify_risk(GREEN_MAX_RISK), ColorBucket::Green);
        assert_eq!(classify_risk(GREEN_MAX_RISK + 1), ColorBucket::Yellow);
        assert_eq!(classify_risk(YELLOW_MAX_RISK), ColorBucket::Yellow);
        assert_eq!(classify_risk(YELLOW_MAX_RISK + 1), ColorBucket::Red);
        assert_eq!(classify_risk(100), ColorBucket::Red);
    }

    #[test]
    fn neutral_profile_risk_depends_on_attachment() {
        let traits = PersonalityTraits::default();
        let eq = EmotionalIntelligence::default();
        assert_eq!(risk_score(AttachmentStyle::Secure, &traits, &eq), 30);
        assert_eq!(risk_score(AttachmentStyle::Anxious, &traits, &eq), 54);
        assert_eq!(risk_score(AttachmentStyle::Avoidant, &traits, &eq), 54);
        assert_eq!(risk_score(AttachmentStyle::Fearful, &traits, &eq), 70);
    }

    #[test]
    fn extremes_span_the_full_range() {
        let best = PersonalityTraits {
            openness: 100,
            conscientiousness: 100,
            extraversion: 100,
            agreeableness: 100,
            neuroticism: 0,
        };
        let worst = PersonalityTraits {
            openness: 0,
            conscientiousness: 0,
            extraversion: 0,
            agreeableness: 0,
            neuroticism: 100,
        };
        let high_eq = EmotionalIntelligence {
            self_awareness: 100,
            self_regulation: 100,
            motivation: 100,
            empathy: 100,
            social_skills: 100,
        };
        let low_eq = EmotionalIntelligence {
            self_awareness: 0,
            self_regulation: 0,
            motivation: 0,
            empathy: 0,
            social_skills: 0,
        };
        assert_eq!(risk_score(AttachmentStyle::Secure, &best, &high_eq), 0);
        assert_eq!(risk_score(AttachmentStyle::Fearful, &worst, &low_eq), 100);
        assert_eq!(emotional_balance(&best), 0);
        assert_eq!(emotional_balance(&worst), 100);
    }
}
