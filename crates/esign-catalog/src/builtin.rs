//! The built-in four-plan catalog offered on the signing page

use crate::plan::{PlanDetail, PlanOption};

/// Plans in display order ("plan 1..4")
#[must_use]
pub fn builtin_plans() -> Vec<PlanOption> {
    vec![
        PlanOption::new("early_bird", "1. 早鳥優惠價", "月費 $1 + 交易費 3%")
            .with_badge("限2025/12/31前")
            .with_detail(PlanDetail::new(
                "1-1. 交易服務費",
                "乙方每筆交易需向甲方支付交易服務費為交易金額的 [3%]（含稅），未含金融支付手續費，每月[1800]元上限。若平台交易營業額為一萬以下，免收交易服務費。",
            ))
            .with_detail(PlanDetail::new(
                "1-2. 平台使用費",
                "乙方需向甲方支付平台使用費，內容包含訂餐、訂位等功能，每月[1]元整。",
            )),
        PlanOption::new("economic", "2. 經濟型", "月費 $600 + 交易費 3%")
            .with_detail(PlanDetail::new(
                "2-1. 交易服務費",
                "乙方每筆交易需向甲方支付交易服務費為交易金額的 [3%]（含稅），未含金融支付手續費，每月[1800]元上限。",
            ))
            .with_detail(PlanDetail::new(
                "2-2. 平台使用費",
                "乙方需向甲方支付平台使用費，內容包含訂餐、訂位等功能，每月[600]元整。",
            )),
        PlanOption::new("buffet_monthly", "3. 吃到飽月費制", "月費 $1,500").with_detail(
            PlanDetail::new(
                "3-1. 吃到飽專案",
                "每月[1500]元整。無需支付額外交易服務費（金融手續費另計）。",
            ),
        ),
        PlanOption::new("buffet_yearly", "4. 吃到飽年費制", "年費 $15,000").with_detail(
            PlanDetail::new(
                "4-1. 吃到飽專案",
                "每年[15000]元整。無需支付額外交易服務費（金融手續費另計）。",
            ),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_plans_in_order() {
        let ids: Vec<_> = builtin_plans().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, ["early_bird", "economic", "buffet_monthly", "buffet_yearly"]);
    }

    #[test]
    fn only_early_bird_has_badge() {
        let badged: Vec<_> = builtin_plans()
            .into_iter()
            .filter(|p| p.badge.is_some())
            .map(|p| p.id)
            .collect();
        assert_eq!(badged, ["early_bird"]);
    }
}
