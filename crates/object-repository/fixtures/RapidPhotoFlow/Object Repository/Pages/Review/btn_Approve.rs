<?xml version="1.0" encoding="UTF-8"?>
<WebElementEntity>
   <description>Approve action button</description>
   <name>btn_Approve</name>
   <tag></tag>
   <elementGuidId>review-approve-button</elementGuidId>
   <selectorCollection>
      <entry>
         <key>XPATH</key>
         <value>//button[contains(text(), 'Approve') or @aria-label='Approve']</value>
      </entry>
      <entry>
         <key>CSS</key>
         <value>[data-testid='approve-button'], button[aria-label='Approve']</value>
      </entry>
   </selectorCollection>
   <selectorMethod>XPATH</selectorMethod>
   <useRalativeImagePath>false</useRalativeImagePath>
</WebElementEntity>
