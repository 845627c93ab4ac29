//! Compiled-in sample data.
//!
//! Used whenever no KPI API is configured, and as the fixture for tests and
//! benches. The KPI table deliberately reuses `id: 40` for two different
//! indicators; consumers must not treat `id` as unique.

use crate::ethnic::EthnicDistributionRow;
use crate::kpi::KpiCategory::{Environment as Env, Governance as Gov, Social as Soc};
use crate::kpi::{KpiCategory, KpiRecord};
use crate::ods::{Project, ODS_COUNT};

struct SampleKpi {
    id: i64,
    name: &'static str,
    category: KpiCategory,
    year: i32,
    target: f64,
    actual: f64,
    unit: &'static str,
    description: &'static str,
    frequency: &'static str,
    method: &'static str,
    status: &'static str,
    favorite: bool,
    companhia: &'static str,
}

#[rustfmt::skip]
const SAMPLE_KPIS: &[SampleKpi] = &[
    SampleKpi { id: 1, name: "Emissões de GEE (Escopo 1)", category: Env, year: 2023, target: 12_000.0, actual: 12_850.0, unit: "tCO2e", description: "Emissões diretas de gases de efeito estufa", frequency: "Anual", method: "Inventário GHG Protocol", status: "Em andamento", favorite: true, companhia: "Aurora Energia" },
    SampleKpi { id: 2, name: "Energia Renovável", category: Env, year: 2023, target: 60.0, actual: 64.5, unit: "%", description: "Participação de fontes renováveis no consumo total", frequency: "Mensal", method: "Medição", status: "Atingido", favorite: true, companhia: "Aurora Energia" },
    SampleKpi { id: 3, name: "Emissões de GEE (Escopo 1)", category: Env, year: 2022, target: 13_000.0, actual: 13_420.0, unit: "tCO2e", description: "Emissões diretas de gases de efeito estufa", frequency: "Anual", method: "Inventário GHG Protocol", status: "Não atingido", favorite: false, companhia: "Aurora Energia" },
    SampleKpi { id: 4, name: "Mulheres na Liderança", category: Soc, year: 2023, target: 40.0, actual: 36.5, unit: "%", description: "Percentual de mulheres em cargos de gestão", frequency: "Semestral", method: "Sistema de RH", status: "Em andamento", favorite: true, companhia: "" },
    SampleKpi { id: 5, name: "Taxa de Rotatividade", category: Soc, year: 2023, target: 12.0, actual: 13.8, unit: "%", description: "Desligamentos sobre o quadro médio", frequency: "Mensal", method: "Sistema de RH", status: "Não atingido", favorite: false, companhia: "" },
    SampleKpi { id: 6, name: "Conselheiros Independentes", category: Gov, year: 2023, target: 50.0, actual: 45.0, unit: "%", description: "Participação de membros independentes no conselho", frequency: "Anual", method: "Ata de assembleia", status: "Em andamento", favorite: false, companhia: "Aurora Participações" },
    SampleKpi { id: 7, name: "Treinamento Anticorrupção", category: Gov, year: 2023, target: 100.0, actual: 97.5, unit: "%", description: "Colaboradores treinados na política anticorrupção", frequency: "Anual", method: "Plataforma de ensino", status: "Em andamento", favorite: true, companhia: "Aurora Participações" },
    SampleKpi { id: 8, name: "Resíduos Reciclados", category: Env, year: 2023, target: 75.0, actual: 71.2, unit: "%", description: "Resíduos destinados à reciclagem", frequency: "Mensal", method: "Manifesto de transporte", status: "Em andamento", favorite: false, companhia: "Aurora Energia" },
    SampleKpi { id: 9, name: "Horas de Treinamento", category: Soc, year: 2023, target: 40.0, actual: 44.0, unit: "h/colaborador", description: "Média de horas de capacitação por colaborador", frequency: "Anual", method: "Plataforma de ensino", status: "Atingido", favorite: false, companhia: "" },
    SampleKpi { id: 10, name: "Mulheres na Liderança", category: Soc, year: 2022, target: 35.0, actual: 33.1, unit: "%", description: "Percentual de mulheres em cargos de gestão", frequency: "Semestral", method: "Sistema de RH", status: "Não atingido", favorite: false, companhia: "" },
    SampleKpi { id: 11, name: "Taxa de Frequência de Acidentes", category: Soc, year: 2023, target: 1.5, actual: 1.2, unit: "índice", description: "Acidentes com afastamento por milhão de horas trabalhadas", frequency: "Mensal", method: "Registro SESMT", status: "Atingido", favorite: false, companhia: "Aurora Energia" },
    SampleKpi { id: 12, name: "Conselheiros Independentes", category: Gov, year: 2022, target: 40.0, actual: 40.0, unit: "%", description: "Participação de membros independentes no conselho", frequency: "Anual", method: "Ata de assembleia", status: "Atingido", favorite: false, companhia: "Aurora Participações" },
    SampleKpi { id: 13, name: "Denúncias Apuradas", category: Gov, year: 2023, target: 100.0, actual: 92.0, unit: "%", description: "Denúncias do canal de ética com apuração concluída", frequency: "Trimestral", method: "Canal de ética", status: "Em andamento", favorite: false, companhia: "" },
    SampleKpi { id: 14, name: "Mulheres no Conselho", category: Gov, year: 2023, target: 30.0, actual: 27.3, unit: "%", description: "Participação feminina no conselho de administração", frequency: "Anual", method: "Ata de assembleia", status: "Em andamento", favorite: false, companhia: "Aurora Participações" },
    SampleKpi { id: 15, name: "Consumo de Água", category: Env, year: 2022, target: 480_000.0, actual: 502_300.0, unit: "m³", description: "Captação total de água", frequency: "Mensal", method: "Hidrômetro", status: "Não atingido", favorite: false, companhia: "Aurora Energia" },
    SampleKpi { id: 16, name: "Investimento Social Privado", category: Soc, year: 2022, target: 2_500.0, actual: 2_710.0, unit: "R$ mil", description: "Recursos aplicados em projetos sociais", frequency: "Anual", method: "Contabilidade", status: "Atingido", favorite: false, companhia: "Instituto Aurora" },
    SampleKpi { id: 17, name: "IEER", category: Soc, year: 2023, target: 0.80, actual: 0.72, unit: "índice", description: "Índice de Equidade Étnico-Racial", frequency: "Anual", method: "Censo interno", status: "Em andamento", favorite: true, companhia: "" },
    SampleKpi { id: 18, name: "Fornecedores Avaliados em ESG", category: Gov, year: 2023, target: 80.0, actual: 68.0, unit: "%", description: "Fornecedores críticos avaliados em critérios socioambientais", frequency: "Anual", method: "Portal de fornecedores", status: "Não atingido", favorite: false, companhia: "" },
    SampleKpi { id: 19, name: "Treinamento Anticorrupção", category: Gov, year: 2022, target: 100.0, actual: 94.0, unit: "%", description: "Colaboradores treinados na política anticorrupção", frequency: "Anual", method: "Plataforma de ensino", status: "Não atingido", favorite: false, companhia: "Aurora Participações" },
    SampleKpi { id: 20, name: "Mulheres no Conselho", category: Gov, year: 2022, target: 25.0, actual: 18.2, unit: "%", description: "Participação feminina no conselho de administração", frequency: "Anual", method: "Ata de assembleia", status: "Não atingido", favorite: false, companhia: "Aurora Participações" },
    SampleKpi { id: 21, name: "Emissões de GEE (Escopo 2)", category: Env, year: 2023, target: 5_400.0, actual: 5_120.0, unit: "tCO2e", description: "Emissões indiretas pela compra de energia", frequency: "Anual", method: "Inventário GHG Protocol", status: "Atingido", favorite: false, companhia: "Aurora Energia" },
    SampleKpi { id: 22, name: "Consumo de Água", category: Env, year: 2023, target: 460_000.0, actual: 455_800.0, unit: "m³", description: "Captação total de água", frequency: "Mensal", method: "Hidrômetro", status: "Atingido", favorite: false, companhia: "Aurora Energia" },
    SampleKpi { id: 23, name: "IEER", category: Soc, year: 2022, target: 0.75, actual: 0.68, unit: "índice", description: "Índice de Equidade Étnico-Racial", frequency: "Anual", method: "Censo interno", status: "Não atingido", favorite: false, companhia: "" },
    SampleKpi { id: 24, name: "IEER", category: Soc, year: 2021, target: 0.70, actual: 0.61, unit: "índice", description: "Índice de Equidade Étnico-Racial", frequency: "Anual", method: "Censo interno", status: "Não atingido", favorite: false, companhia: "" },
    SampleKpi { id: 25, name: "Políticas Corporativas Revisadas", category: Gov, year: 2023, target: 12.0, actual: 12.0, unit: "políticas", description: "Políticas revisadas no ciclo anual", frequency: "Anual", method: "Compliance", status: "Atingido", favorite: false, companhia: "" },
    SampleKpi { id: 26, name: "Auditorias Internas Concluídas", category: Gov, year: 2023, target: 8.0, actual: 7.0, unit: "auditorias", description: "Trabalhos do plano anual de auditoria concluídos", frequency: "Anual", method: "Auditoria interna", status: "Em andamento", favorite: false, companhia: "" },
    SampleKpi { id: 27, name: "Fornecedores Avaliados em ESG", category: Gov, year: 2022, target: 70.0, actual: 61.0, unit: "%", description: "Fornecedores críticos avaliados em critérios socioambientais", frequency: "Anual", method: "Portal de fornecedores", status: "Não atingido", favorite: false, companhia: "" },
    SampleKpi { id: 28, name: "Área Reflorestada", category: Env, year: 2023, target: 120.0, actual: 134.0, unit: "ha", description: "Área recuperada com espécies nativas", frequency: "Anual", method: "Georreferenciamento", status: "Atingido", favorite: true, companhia: "Instituto Aurora" },
    SampleKpi { id: 29, name: "Investimento Social Privado", category: Soc, year: 2023, target: 3_000.0, actual: 2_890.0, unit: "R$ mil", description: "Recursos aplicados em projetos sociais", frequency: "Anual", method: "Contabilidade", status: "Em andamento", favorite: false, companhia: "Instituto Aurora" },
    SampleKpi { id: 30, name: "Colaboradores Pretos e Pardos", category: Soc, year: 2023, target: 45.0, actual: 41.7, unit: "%", description: "Participação de pessoas pretas e pardas no quadro", frequency: "Semestral", method: "Censo interno", status: "Em andamento", favorite: false, companhia: "" },
    SampleKpi { id: 31, name: "Incidentes de Segurança da Informação", category: Gov, year: 2023, target: 0.0, actual: 2.0, unit: "incidentes", description: "Incidentes relevantes reportados ao comitê de riscos", frequency: "Trimestral", method: "SOC", status: "Não atingido", favorite: false, companhia: "" },
    SampleKpi { id: 32, name: "Remuneração Variável Atrelada a ESG", category: Gov, year: 2023, target: 20.0, actual: 15.0, unit: "%", description: "Parcela da remuneração variável vinculada a metas ESG", frequency: "Anual", method: "Comitê de pessoas", status: "Em andamento", favorite: false, companhia: "Aurora Participações" },
    SampleKpi { id: 33, name: "Energia Renovável", category: Env, year: 2022, target: 55.0, actual: 52.3, unit: "%", description: "Participação de fontes renováveis no consumo total", frequency: "Mensal", method: "Medição", status: "Não atingido", favorite: false, companhia: "Aurora Energia" },
    SampleKpi { id: 34, name: "Satisfação dos Colaboradores", category: Soc, year: 2023, target: 80.0, actual: 78.0, unit: "%", description: "Favorabilidade na pesquisa de clima", frequency: "Anual", method: "Pesquisa de clima", status: "Em andamento", favorite: false, companhia: "" },
    SampleKpi { id: 35, name: "Emissões de GEE (Escopo 2)", category: Env, year: 2022, target: 5_800.0, actual: 5_960.0, unit: "tCO2e", description: "Emissões indiretas pela compra de energia", frequency: "Anual", method: "Inventário GHG Protocol", status: "Não atingido", favorite: false, companhia: "Aurora Energia" },
    SampleKpi { id: 36, name: "Resíduos Reciclados", category: Env, year: 2022, target: 70.0, actual: 66.4, unit: "%", description: "Resíduos destinados à reciclagem", frequency: "Mensal", method: "Manifesto de transporte", status: "Não atingido", favorite: false, companhia: "Aurora Energia" },
    SampleKpi { id: 37, name: "IEER", category: Soc, year: 2020, target: 0.65, actual: 0.57, unit: "índice", description: "Índice de Equidade Étnico-Racial", frequency: "Anual", method: "Censo interno", status: "Não atingido", favorite: false, companhia: "" },
    SampleKpi { id: 38, name: "Taxa de Rotatividade", category: Soc, year: 2022, target: 13.0, actual: 14.6, unit: "%", description: "Desligamentos sobre o quadro médio", frequency: "Mensal", method: "Sistema de RH", status: "Não atingido", favorite: false, companhia: "" },
    SampleKpi { id: 39, name: "Denúncias Apuradas", category: Gov, year: 2022, target: 100.0, actual: 88.0, unit: "%", description: "Denúncias do canal de ética com apuração concluída", frequency: "Trimestral", method: "Canal de ética", status: "Não atingido", favorite: false, companhia: "" },
    SampleKpi { id: 40, name: "Colaboradores com Deficiência", category: Soc, year: 2023, target: 5.0, actual: 4.6, unit: "%", description: "Participação de pessoas com deficiência no quadro", frequency: "Semestral", method: "Sistema de RH", status: "Em andamento", favorite: false, companhia: "" },
    SampleKpi { id: 40, name: "Remuneração Variável Atrelada a ESG", category: Gov, year: 2022, target: 15.0, actual: 10.0, unit: "%", description: "Parcela da remuneração variável vinculada a metas ESG", frequency: "Anual", method: "Comitê de pessoas", status: "Não atingido", favorite: false, companhia: "Aurora Participações" },
];

fn sector_for(category: KpiCategory) -> &'static str {
    match category {
        KpiCategory::Environment => "Meio Ambiente",
        KpiCategory::Social => "Pessoas",
        KpiCategory::Governance => "Compliance",
    }
}

/// The sample KPI table, in source order.
pub fn sample_kpis() -> Vec<KpiRecord> {
    SAMPLE_KPIS
        .iter()
        .map(|s| KpiRecord {
            id: s.id,
            name: s.name.to_string(),
            category: s.category,
            year: s.year,
            target_value: s.target,
            actual_value: s.actual,
            unit: s.unit.to_string(),
            description: s.description.to_string(),
            frequency: s.frequency.to_string(),
            collection_method: s.method.to_string(),
            status: s.status.to_string(),
            is_favorite: s.favorite,
            companhia: s.companhia.to_string(),
            setor: sector_for(s.category).to_string(),
        })
        .collect()
}

/// Workforce ethnic composition per year (percentages).
#[rustfmt::skip]
const ETHNIC_SHARES: &[(i32, [f64; 5])] = &[
    // Branca, Preta, Parda, Amarela, Indígena
    (2020, [58.4, 9.1, 29.8, 2.1, 0.6]),
    (2021, [55.9, 10.3, 31.1, 2.0, 0.7]),
    (2022, [53.2, 11.6, 32.4, 2.0, 0.8]),
    (2023, [50.7, 12.9, 33.6, 1.9, 0.9]),
];

pub fn sample_ethnic_distribution() -> Vec<EthnicDistributionRow> {
    ETHNIC_SHARES
        .iter()
        .map(|(year, shares)| EthnicDistributionRow::from_shares(*year, shares))
        .collect()
}

/// Social/environmental projects with their ODS contribution levels (0-2).
#[rustfmt::skip]
const SAMPLE_PROJECTS: &[(&str, &[(usize, f64)])] = &[
    ("Programa Jovem Aprendiz", &[(4, 2.0), (8, 2.0), (10, 1.0)]),
    ("Reflorestamento Mata Atlântica", &[(6, 1.0), (13, 2.0), (15, 2.0)]),
    ("Energia Solar nas Comunidades", &[(7, 2.0), (11, 1.0), (13, 1.0)]),
    ("Água Limpa no Semiárido", &[(3, 1.0), (6, 2.0)]),
    ("Equidade Racial na Liderança", &[(5, 1.0), (8, 1.0), (10, 2.0)]),
];

pub fn sample_projects() -> Vec<Project> {
    SAMPLE_PROJECTS
        .iter()
        .map(|(name, contributions)| {
            let mut ods = [None; ODS_COUNT];
            for &(goal, level) in contributions.iter() {
                ods[goal - 1] = Some(level);
            }
            Project {
                name: name.to_string(),
                ods,
            }
        })
        .collect()
}
