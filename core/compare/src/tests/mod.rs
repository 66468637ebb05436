//! シナリオテスト（スタブのコラボレーターで一連の流れを検証）

mod support;
