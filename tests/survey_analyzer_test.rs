// ==========================================
// SurveyAnalyzer 엔진 통합 테스트
// ==========================================
// 테스트 목표: 설문 점수 집계와 응답률 계산 검증
// 커버 범위: 전체/범주 평균 / 점수 범위 검증 / 응답률 분모 0
// ==========================================

use hr_stat_core::domain::survey::SurveyResponse;
use hr_stat_core::engine::SurveyAnalyzer;
use hr_stat_core::error::CoreError;

// ==========================================
// 테스트 보조 함수
// ==========================================

/// 테스트용 설문 응답 생성
fn create_test_response(question_id: &str, category: &str, score: u8) -> SurveyResponse {
    SurveyResponse {
        question_id: question_id.to_string(),
        category: category.to_string(),
        score,
    }
}

/// 조직 갈등 진단 설문 세트 (5점 척도)
fn create_conflict_survey() -> Vec<SurveyResponse> {
    vec![
        create_test_response("Q1", "업무갈등", 4),
        create_test_response("Q2", "업무갈등", 3),
        create_test_response("Q3", "관계갈등", 5),
        create_test_response("Q4", "관계갈등", 2),
        create_test_response("Q5", "소통", 4),
        create_test_response("Q6", "소통", 4),
    ]
}

// ==========================================
// 테스트 케이스 1: 평균 집계
// ==========================================

#[test]
fn test_overall_and_category_means() {
    println!("\n=== 테스트: 설문 평균 집계 ===");

    let analyzer = SurveyAnalyzer::new();
    let responses = create_conflict_survey();

    let overall = analyzer.overall_mean(&responses).unwrap();
    let by_category = analyzer.category_means(&responses).unwrap();

    // (4+3+5+2+4+4) / 6 = 22 / 6
    assert!((overall - 22.0 / 6.0).abs() < 1e-9);
    assert!((by_category["업무갈등"] - 3.5).abs() < 1e-9);
    assert!((by_category["관계갈등"] - 3.5).abs() < 1e-9);
    assert!((by_category["소통"] - 4.0).abs() < 1e-9);

    println!("전체 평균: {:.2}", overall);
    for (category, mean) in &by_category {
        println!("{}: {:.2}", category, mean);
    }
}

#[test]
fn test_empty_survey_means_are_zero() {
    let analyzer = SurveyAnalyzer::new();

    assert_eq!(analyzer.overall_mean(&[]).unwrap(), 0.0);
    assert!(analyzer.category_means(&[]).unwrap().is_empty());
}

// ==========================================
// 테스트 케이스 2: 점수 범위 검증
// ==========================================

#[test]
fn test_out_of_scale_score_rejected() {
    println!("\n=== 테스트: 척도 밖 점수 거부 ===");

    let analyzer = SurveyAnalyzer::new();

    // 5점 척도에서 0점과 6점은 유효하지 않음
    let zero = vec![create_test_response("Q1", "소통", 0)];
    let six = vec![create_test_response("Q1", "소통", 6)];

    assert!(matches!(
        analyzer.overall_mean(&zero),
        Err(CoreError::InvalidInput { .. })
    ));
    assert!(matches!(
        analyzer.overall_mean(&six),
        Err(CoreError::InvalidInput { .. })
    ));
}

// ==========================================
// 테스트 케이스 3: 응답률
// ==========================================

#[test]
fn test_response_rate() {
    println!("\n=== 테스트: 응답률 ===");

    let analyzer = SurveyAnalyzer::new();

    // 배포 65명 중 58명 응답
    let rate = analyzer.response_rate(58, 65).unwrap();
    assert!((rate - 58.0 / 65.0 * 100.0).abs() < 1e-9);

    // 배포 0명이면 응답률 미정의
    assert_eq!(
        analyzer.response_rate(0, 0),
        Err(CoreError::UndefinedRatio {
            indicator: "response_rate".to_string()
        })
    );

    // 응답이 배포 인원을 초과하면 입력 오류
    assert!(matches!(
        analyzer.response_rate(70, 65),
        Err(CoreError::InvalidInput { .. })
    ));
}
