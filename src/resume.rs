use crate::compose::{Composer, PageFooter};
use crate::model::{Alignment, Document, FontVariant, PageGeometry};

/// Default output filename, written to the current working directory.
pub const DEFAULT_OUTPUT: &str = "curriculo_petshop_exemplo.pdf";

const NOME: &str = "ANA LUIZA COSTA SANTOS";
const SUBTITULO: &str =
    "Veterinária | Gerência de Petshop | Atendimento ao Cliente | Gestão de Estoque";
const CONTATO: &str = "Curitiba, PR | (99) 99999-99999 | ana.costa.petshop@email.com";
const LINKEDIN: &str = "www.linkedin.com/in/ana-costa-petshop";

const RESUMO: &str = "Profissional da área veterinária com mais de 5 anos de experiência em \
    gestão de petshops, atenção clínica a animais de pequeno porte e atendimento especializado \
    ao cliente. Especialista em cuidados com animais exóticos, nutrição animal e comportamento \
    pet. Experiência sólida em gestão de equipes, controle de estoque de produtos veterinários \
    e implementação de sistemas de agendamento digital. Comprometida com o bem-estar animal e a \
    excelência no atendimento, buscando sempre atualizar conhecimentos na área.";

const FORMACAO: [(&str, &str); 2] = [
    (
        "Bacharelado em Medicina Veterinária",
        "Universidade Federal do Paraná (UFPR) | 2016 - 2021",
    ),
    (
        "Pós-Graduação em Gestão de Negócios Pet",
        "Instituto de Ensino Veterinário | 2022 - 2023",
    ),
];

// (empresa, cargo e período, descrição)
const EXPERIENCIAS: [(&str, &str, &str); 3] = [
    (
        "PetShop Premium Curitiba",
        "Gerente Veterinária | Março 2022 - Atualmente",
        "- Gestão completa do petshop incluindo equipe de 8 funcionários\n\
         - Atendimento clínico a cães, gatos e animais exóticos\n\
         - Controle de estoque e compras de produtos veterinários\n\
         - Implementação de sistema digital de agendamento\n\
         - Organização de eventos comunitários sobre posse responsável\n\
         - Treinamento de novos funcionários em técnicas de manejo animal",
    ),
    (
        "Clínica Animal Feliz",
        "Veterinária Clínica | Janeiro 2021 - Fevereiro 2022",
        "- Atendimento clínico geral e emergencial\n\
         - Realização de cirurgias de rotina (castrações, etc.)\n\
         - Orientação nutricional e programas de prevenção\n\
         - Acompanhamento de animais crônicos e geriátricos\n\
         - Elaboração de protocolos de biossegurança",
    ),
    (
        "PetShop Cão e Gato",
        "Assistente Veterinária | Agosto 2019 - Dezembro 2020",
        "- Auxílio em consultas e procedimentos clínicos\n\
         - Responsável pelo setor de banho e tosa\n\
         - Controle de vacinação e vermifugação\n\
         - Atendimento ao cliente e vendas de produtos\n\
         - Organização do estoque de medicamentos",
    ),
];

const ESPECIALIZACOES: [&str; 7] = [
    "- Clínica de animais exóticos (aves, roedores, répteis)",
    "- Nutrição animal e dietas especiais",
    "- Comportamento animal e treinamento básico",
    "- Primeiros socorros veterinários",
    "- Gestão financeira de estabelecimentos pet",
    "- Marketing digital para petshops",
    "- Biossegurança em ambientes veterinários",
];

const HABILIDADES: [&str; 9] = [
    "Atendimento clínico a pequenos animais",
    "Realização de exames laboratoriais básicos",
    "Administração de medicamentos e fluidoterapia",
    "Técnicas de contenção e manejo animal",
    "Gestão de estoque e controle de produtos",
    "Sistemas de agendamento digital (PetSharp, ClinicPet)",
    "Elaboração de planos de saúde animal",
    "Microsoft Office (Excel para controle de estoque)",
    "Inglês técnico para leitura de artigos",
];

const CURSOS: [&str; 7] = [
    "Curso Avançado em Animais Exóticos - CRMV-PR (2023)",
    "Gestão Financeira para Petshops - Sebrae (2022)",
    "Primeiros Socorros Veterinários - Instituto Pet Care (2021)",
    "Nutrição Clínica de Cães e Gatos - Universidade Pet (2020)",
    "Comportamento Animal - ABRAVET (2019)",
    "Marketing Digital para Clínicas Veterinárias - Digital Vet (2022)",
    "Biossegurança em Ambientes Veterinários - ANCLIVEPA (2021)",
];

const ADICIONAL: &str = "Disponibilidade para trabalho em finais de semana e feriados (escalas)\n\
    Habilitação categoria B\n\
    Participação em eventos beneficentes de adoção animal\n\
    Membro ativo da Associação Brasileira de Veterinários (ABV)";

/// Composes the full résumé: centered header with a separating rule, then
/// the six body sections in ABNT order, with a page-number footer.
pub fn compose() -> Document {
    let mut doc = Composer::new(PageGeometry::a4_abnt());
    doc.set_footer(PageFooter::page_number());

    doc.set_font(FontVariant::Bold, 16.0);
    doc.add_line(NOME, Alignment::Center, 10.0);
    doc.set_font(FontVariant::Regular, 12.0);
    doc.add_line(SUBTITULO, Alignment::Center, 6.0);
    doc.add_spacer(2.0);

    doc.set_font(FontVariant::Regular, 10.0);
    doc.add_line(CONTATO, Alignment::Center, 6.0);
    doc.add_line(LINKEDIN, Alignment::Center, 6.0);

    doc.add_spacer(5.0);
    let rule_y = doc.cursor();
    doc.add_rule(rule_y);
    doc.add_spacer(5.0);

    doc.add_section_title("Resumo Profissional");
    doc.set_font(FontVariant::Regular, 11.0);
    doc.add_paragraph(RESUMO, 6.0, Alignment::Justify);
    doc.add_spacer(5.0);

    doc.add_section_title("Formação Acadêmica");
    for (i, (curso, instituicao)) in FORMACAO.into_iter().enumerate() {
        doc.set_font(FontVariant::Bold, 11.0);
        doc.add_line(curso, Alignment::Left, 6.0);
        doc.set_font(FontVariant::Regular, 11.0);
        doc.add_line(instituicao, Alignment::Left, 6.0);
        doc.add_spacer(if i + 1 == FORMACAO.len() { 5.0 } else { 3.0 });
    }

    doc.add_section_title("Experiência Profissional");
    for (i, (empresa, cargo, descricao)) in EXPERIENCIAS.into_iter().enumerate() {
        doc.set_font(FontVariant::Bold, 11.0);
        doc.add_line(empresa, Alignment::Left, 6.0);
        doc.set_font(FontVariant::Oblique, 10.0);
        doc.add_line(cargo, Alignment::Left, 6.0);
        doc.set_font(FontVariant::Regular, 10.0);
        doc.add_paragraph(descricao, 6.0, Alignment::Justify);
        doc.add_spacer(if i + 1 == EXPERIENCIAS.len() { 5.0 } else { 3.0 });
    }

    doc.add_section_title("Especializações e Competências");
    doc.set_font(FontVariant::Regular, 10.0);
    for especializacao in ESPECIALIZACOES {
        doc.add_paragraph(especializacao, 6.0, Alignment::Justify);
    }
    doc.add_spacer(5.0);

    doc.add_section_title("Habilidades Técnicas");
    doc.set_font(FontVariant::Regular, 10.0);
    for habilidade in HABILIDADES {
        doc.add_line(&format!("- {habilidade}"), Alignment::Left, 6.0);
    }
    doc.add_spacer(5.0);

    // No font change after this title: the course list renders in the
    // section-title bold, as in the published layout.
    doc.add_section_title("Cursos e Certificações");
    for curso in CURSOS {
        doc.add_line(&format!("- {curso}"), Alignment::Left, 6.0);
    }
    doc.add_spacer(10.0);

    doc.add_section_title("Informações Adicionais");
    doc.set_font(FontVariant::Regular, 10.0);
    doc.add_paragraph(ADICIONAL, 6.0, Alignment::Justify);

    doc.finish()
}
