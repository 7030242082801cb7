<?xml version="1.0" encoding="UTF-8"?>
<WebElementEntity>
   <description>Reject action button</description>
   <name>btn_Reject</name>
   <tag></tag>
   <elementGuidId>review-reject-button</elementGuidId>
   <selectorCollection>
      <entry>
         <key>XPATH</key>
         <value>//button[contains(text(), 'Reject') or @aria-label='Reject']</value>
      </entry>
      <entry>
         <key>CSS</key>
         <value>[data-testid='reject-button'], button[aria-label='Reject']</value>
      </entry>
   </selectorCollection>
   <selectorMethod>XPATH</selectorMethod>
   <useRalativeImagePath>false</useRalativeImagePath>
</WebElementEntity>
