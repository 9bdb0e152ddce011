//! Canned content for the assistant panel: greeting, fallback, the two
//! trigger tables, and the income-banded investment suggestions.
//!
//! Table order is load-bearing. Matching is first-substring-match in
//! declaration order, so earlier entries shadow later ones whenever both
//! triggers occur in the same question. Reordering a table changes observable
//! behavior.

use rust_decimal::Decimal;

/// Greeting seeding every new conversation.
pub const GREETING: &str =
    "Hi! I'm your tax assistant. Ask me anything about taxes, savings, or documentation requirements!";

/// Answer returned when no trigger matches.
pub const FALLBACK: &str = "I'm still learning";

/// The compact topical table.
pub(crate) const FAQ_RESPONSES: &[(&str, &str)] = &[
    (
        "save tax",
        "You can save tax through various deductions under Section 80C like PPF, ELSS, and life insurance premiums. You can also claim HRA if you're paying rent, and home loan interest deductions.",
    ),
    (
        "documents",
        "For tax filing, you'll need: Form 16 from employer, bank interest statements, investment proofs (80C), rent receipts, home loan statement, and PAN card.",
    ),
    (
        "tax bracket",
        "Tax slabs for FY 2023-24 under the old regime are: No tax up to ₹2.5L, 5% up to ₹5L, 20% up to ₹10L, and 30% above ₹10L. A 4% cess is applicable.",
    ),
    (
        "hra",
        "To claim HRA, you need rent receipts, rent agreement, and proof of rent payment. The exemption is the least of: Actual HRA received, 50% of salary (metro) or 40% (non-metro), or rent paid minus 10% of salary.",
    ),
    (
        "section 80c",
        "Under Section 80C, you can invest up to ₹1.5L in PPF, ELSS, NSC, life insurance premiums, or 5-year fixed deposits to save tax.",
    ),
    (
        "tax calculation",
        "To calculate your tax, provide your total income, deductions, and investments. I can help you estimate your tax liability.",
    ),
];

/// The extended table actually consulted by the chat surface.
pub(crate) const EXTENDED_RESPONSES: &[(&str, &str)] = &[
    (
        "hi",
        "Hello! How can I assist you with your tax-related queries today?",
    ),
    ("hello", "Hi there! How can I help you with your taxes?"),
    (
        "how do i calculate my income tax?",
        "To calculate your income tax, you need to consider your taxable income, applicable tax slabs, deductions, and exemptions. Would you like assistance with a specific tax year?",
    ),
    (
        "what are the tax slabs for this year?",
        "The tax slabs vary based on the tax regime you choose. Would you like details on the old tax regime or the new one?",
    ),
    (
        "how can i reduce my taxable income?",
        "You can reduce your taxable income through deductions like 80C (Investments), 80D (Health Insurance), HRA, and others. Would you like specific recommendations based on your income?",
    ),
    (
        "what is section 80c?",
        "Section 80C allows deductions up to ₹1.5 lakh on eligible investments like PPF, EPF, NSC, ELSS, and life insurance premiums. Do you need details on any specific investment?",
    ),
    (
        "how do i file my income tax return?",
        "You can file your ITR online through the income tax e-filing portal. Do you need step-by-step guidance?",
    ),
    (
        "what is form 16?",
        "Form 16 is a TDS certificate issued by your employer that contains details of your salary, deductions, and tax paid. Would you like help understanding it?",
    ),
    (
        "what if i missed the itr filing deadline?",
        "If you missed the deadline, you can file a belated return before the final due date with a late fee. Do you want to check the penalties applicable?",
    ),
    (
        "how can i claim an income tax refund?",
        "If you have paid excess tax, you can claim a refund while filing your ITR. It usually gets credited to your bank account within a few months. Need help checking your refund status?",
    ),
    (
        "what is advance tax?",
        "Advance tax is the tax paid in installments if your total tax liability exceeds ₹10,000. It is paid quarterly. Would you like to calculate your advance tax?",
    ),
    (
        "how do i check my tds?",
        "You can check your TDS details in Form 26AS on the income tax portal. Would you like guidance on accessing it?",
    ),
    (
        "what is form 26as?",
        "Form 26AS is a consolidated statement of your tax credits, including TDS, advance tax, and self-assessment tax. Do you need help downloading it?",
    ),
    (
        "what is capital gains tax?",
        "Capital gains tax is levied on profits from the sale of assets like stocks, property, and gold. Do you need short-term or long-term capital gains tax details?",
    ),
    (
        "how do i save tax on capital gains?",
        "You can save tax by reinvesting in specified bonds, properties, or availing exemptions under sections like 54, 54F, and 54EC. Would you like detailed guidance?",
    ),
    (
        "is crypto taxable in india?",
        "Yes, gains from crypto trading are taxed at 30% plus 4% cess. Would you like help calculating your crypto tax?",
    ),
    (
        "what is gst?",
        "GST (Goods and Services Tax) is an indirect tax levied on goods and services. Would you like to check GST rates or GST return filing details?",
    ),
    (
        "how do i register for gst?",
        "You can register for GST on the GST portal. Would you like step-by-step assistance?",
    ),
    (
        "what is input tax credit (itc)?",
        "Input tax credit allows businesses to reduce their GST liability by claiming credit for the tax paid on purchases. Do you want help understanding ITC claims?",
    ),
    (
        "how do i file gst returns?",
        "GST returns are filed on the GST portal. The frequency depends on your business category. Would you like help with GSTR-1, GSTR-3B, or any other return?",
    ),
    (
        "what is professional tax?",
        "Professional tax is a state-imposed tax on salaried employees and professionals. It varies by state. Would you like to check your state's professional tax rates?",
    ),
    (
        "how can freelancers save taxes?",
        "Freelancers can save tax by claiming deductions under 44ADA, business expenses, and investing in 80C options. Need help with specific deductions?",
    ),
    (
        "what is section 44ada?",
        "Section 44ADA offers presumptive taxation for professionals, allowing them to declare 50% of their income as taxable. Need more details?",
    ),
    (
        "how do i pay self-assessment tax?",
        "You can pay self-assessment tax through the income tax portal using net banking or challan 280. Need assistance?",
    ),
    (
        "how do i check my income tax refund status?",
        "You can check your refund status on the income tax e-filing portal. Need step-by-step guidance?",
    ),
    (
        "what is tax audit?",
        "A tax audit is required if your business turnover exceeds the prescribed limits under section 44AB. Would you like to check if it applies to you?",
    ),
    (
        "how do i declare foreign income in itr?",
        "Foreign income must be declared in ITR under relevant sections. Avoiding declaration may lead to penalties. Need help understanding DTAA?",
    ),
    (
        "what is dtaa?",
        "Double Taxation Avoidance Agreement (DTAA) prevents double taxation of income earned in two countries. Do you need help claiming tax relief under DTAA?",
    ),
    (
        "what is hra exemption?",
        "House Rent Allowance (HRA) exemption can be claimed if you live in a rented house and receive HRA as part of your salary. Need help calculating it?",
    ),
    (
        "how do i claim home loan tax benefits?",
        "You can claim deductions under 80C (principal) and 24(b) (interest). Need help calculating your benefits?",
    ),
    (
        "how can i file taxes if i have multiple sources of income?",
        "All income sources must be declared in your ITR. Do you need help categorizing them correctly?",
    ),
    (
        "what are the penalties for tax evasion?",
        "Tax evasion penalties vary but can be severe, including fines and imprisonment. Would you like guidance on tax compliance?",
    ),
    (
        "what is presumptive taxation?",
        "Presumptive taxation allows small businesses and professionals to pay tax on a predefined percentage of income. Would you like to check eligibility?",
    ),
    (
        "how do i update my pan details?",
        "You can update PAN details on the NSDL portal. Need assistance with the process?",
    ),
    (
        "how do i check my pan-aadhaar linking status?",
        "You can check the status on the income tax portal. Need step-by-step guidance?",
    ),
];

/// Canned investment suggestion for an income band.
pub fn suggest_investments(annual_income: Decimal) -> &'static str {
    if annual_income <= Decimal::from(500_000) {
        "Consider investing in PPF or ELSS to save tax under Section 80C."
    } else if annual_income <= Decimal::from(1_000_000) {
        "You can save tax by investing in PPF, ELSS, or NPS. Also, consider claiming HRA if applicable."
    } else {
        "Maximize your tax savings by investing in PPF, ELSS, NPS, and claiming HRA, home loan interest, and medical insurance premiums."
    }
}
